mod image_encoder;

pub use image_encoder::{encode_bytes, encode_file};
