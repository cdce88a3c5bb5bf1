pub mod redeem;
pub mod service;
pub mod slug;

#[cfg(test)]
pub(crate) mod testing;
