pub mod checksum;
pub mod writer;
