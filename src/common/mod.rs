//! Utility types.
mod bytestr;

pub use bytestr::ByteStr;

#[cfg(test)]
mod test;
