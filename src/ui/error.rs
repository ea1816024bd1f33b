//! Error type shared by layout, atlas and widget calls

use core::convert::Infallible;
use core::fmt::Debug;

use thiserror_no_std::Error;

/// Errors raised while laying out or drawing a frame.
///
/// `E` is the host renderer's error type; calls that never touch the renderer
/// use the default, [`Infallible`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error<E: Debug = Infallible> {
    #[error("auto placement requested with no layout box open")]
    NoActiveLayout,
    #[error("layout boxes nested deeper than {0}")]
    LayoutStackExhausted(usize),
    #[error("atlas of {width}x{height}px ({len} bytes) does not divide into {tile_width}x{tile_height}px tiles")]
    InvalidAtlas {
        width: u32,
        height: u32,
        len: usize,
        tile_width: u32,
        tile_height: u32,
    },
    #[error("draw call failed: {0:?}")]
    Draw(E),
}

impl Error {
    /// Widen an error raised without a renderer into one carrying renderer
    /// errors of type `E`.
    pub fn widen<E: Debug>(self) -> Error<E> {
        match self {
            Error::NoActiveLayout => Error::NoActiveLayout,
            Error::LayoutStackExhausted(depth) => Error::LayoutStackExhausted(depth),
            Error::InvalidAtlas {
                width,
                height,
                len,
                tile_width,
                tile_height,
            } => Error::InvalidAtlas {
                width,
                height,
                len,
                tile_width,
                tile_height,
            },
            Error::Draw(never) => match never {},
        }
    }
}

pub type Result<T, E = Infallible> = core::result::Result<T, Error<E>>;
