mod codec;
mod filters;
mod load;
mod meta;
mod save;
mod transform;

pub use codec::{DecodeError, EncodeError, FileCodec, ImageCodec};
pub use filters::Filter;
pub use load::{decode_image_from_path, rgba_to_color_image};
pub use meta::{
    ImageMeta, describe_aspect_ratio, format_system_time, human_readable_bytes, total_pixel_count,
};
pub use save::encode_image_to_path;
pub use transform::usize_dimensions;
