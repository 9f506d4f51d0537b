use gpui::Pixels;

pub mod number_formatter;

pub use number_formatter::{format_grouped, format_number};

pub trait PixelsExt {
    fn as_f32(&self) -> f32;
}

impl PixelsExt for Pixels {
    fn as_f32(&self) -> f32 {
        f32::from(*self)
    }
}
