// tests/keygen/mod.rs

#[cfg(test)]
mod digest;
