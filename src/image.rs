use crate::{
    Colormap,
    error::{Error, Result},
    marshal::KeywordArgs,
    value::{ToValue, Value},
};

/// Element type of an [`Image`].
///
/// Integer samples are sent as foreign ints (matplotlib reads them as 0..=255
/// for color images), floating samples as foreign floats (0.0..=1.0).
pub trait Sample: ToValue + Copy {}

impl Sample for u8 {}
impl Sample for i32 {}
impl Sample for i64 {}
impl Sample for f32 {}
impl Sample for f64 {}

/// A row-major grid of pixels for `imshow`.
#[derive(Debug, Clone, PartialEq)]
pub enum Image<T> {
    /// One intensity per pixel, mapped through a colormap.
    Scalar(Vec<Vec<T>>),
    Rgb(Vec<Vec<[T; 3]>>),
    Rgba(Vec<Vec<[T; 4]>>),
}

impl<T: Sample> Image<T> {
    /// Number of rows.
    pub fn height(&self) -> usize {
        match self {
            Self::Scalar(rows) => rows.len(),
            Self::Rgb(rows) => rows.len(),
            Self::Rgba(rows) => rows.len(),
        }
    }
}

impl Image<u8> {
    /// Grayscale image from one byte per pixel.
    pub fn gray_from_bytes(width: usize, bytes: &[u8]) -> Result<Self> {
        Ok(Self::Scalar(split_rows(width, bytes, bytes.len())?))
    }

    /// RGB image from tightly packed `[r, g, b]` bytes.
    pub fn rgb_from_bytes(width: usize, bytes: &[u8]) -> Result<Self> {
        let pixels: &[[u8; 3]] = bytemuck::try_cast_slice(bytes).map_err(|_| {
            Error::ImageShape {
                len: bytes.len(),
                row: width.saturating_mul(3),
            }
        })?;
        Ok(Self::Rgb(split_rows(width, pixels, bytes.len())?))
    }

    /// RGBA image from tightly packed `[r, g, b, a]` bytes.
    pub fn rgba_from_bytes(width: usize, bytes: &[u8]) -> Result<Self> {
        let pixels: &[[u8; 4]] = bytemuck::try_cast_slice(bytes).map_err(|_| {
            Error::ImageShape {
                len: bytes.len(),
                row: width.saturating_mul(4),
            }
        })?;
        Ok(Self::Rgba(split_rows(width, pixels, bytes.len())?))
    }
}

fn split_rows<P: Copy>(width: usize, pixels: &[P], byte_len: usize) -> Result<Vec<Vec<P>>> {
    if width == 0 || pixels.len() % width != 0 {
        return Err(Error::ImageShape {
            len: byte_len,
            row: width.saturating_mul(size_of::<P>()),
        });
    }
    Ok(pixels.chunks(width).map(<[P]>::to_vec).collect())
}

fn encode_pixel<T: Sample>(components: &[T]) -> Value {
    Value::Tuple(components.iter().map(ToValue::to_value).collect())
}

impl<T: Sample> ToValue for Image<T> {
    fn to_value(&self) -> Value {
        let rows = match self {
            Self::Scalar(rows) => rows
                .iter()
                .map(|row| Value::List(row.iter().map(ToValue::to_value).collect()))
                .collect(),
            Self::Rgb(rows) => rows
                .iter()
                .map(|row| Value::List(row.iter().map(|p| encode_pixel(p.as_slice())).collect()))
                .collect(),
            Self::Rgba(rows) => rows
                .iter()
                .map(|row| Value::List(row.iter().map(|p| encode_pixel(p.as_slice())).collect()))
                .collect(),
        };
        Value::List(rows)
    }
}

/// Optional keywords of `imshow`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImshowOptions {
    /// Colormap for scalar images. Ignored by matplotlib for RGB(A) data.
    pub cmap: Option<Colormap>,
    pub alpha: Option<f64>,
}

impl ImshowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cmap(mut self, cmap: Colormap) -> Self {
        self.cmap = Some(cmap);
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub(crate) fn kwargs(&self) -> KeywordArgs {
        KeywordArgs::new()
            .set_opt("cmap", self.cmap.as_ref())
            .set_opt("alpha", self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(xs: &[i64]) -> Value {
        Value::List(xs.iter().map(|&x| Value::Int(x)).collect())
    }

    #[test]
    fn scalar_int_grid() {
        let image = Image::Scalar(vec![vec![1i64, 2], vec![3, 4]]);
        assert_eq!(
            image.to_value(),
            Value::List(vec![ints(&[1, 2]), ints(&[3, 4])])
        );
    }

    #[test]
    fn rgb_pixels_become_tuples() {
        let image = Image::Rgb(vec![vec![[1u8, 2, 3]]]);
        assert_eq!(
            image.to_value(),
            Value::List(vec![Value::List(vec![Value::Tuple(vec![
                Value::Int(1),
                Value::Int(2),
                Value::Int(3),
            ])])])
        );
        assert_eq!(image.to_value().to_string(), "[[(1, 2, 3)]]");
    }

    #[test]
    fn float_samples_stay_floats() {
        let image = Image::Rgba(vec![vec![[0.0f64, 0.5, 1.0, 1.0]]]);
        assert_eq!(image.to_value().to_string(), "[[(0.0, 0.5, 1.0, 1.0)]]");
        let image = Image::Scalar(vec![vec![0.25f32]]);
        assert_eq!(image.to_value().to_string(), "[[0.25]]");
    }

    #[test]
    fn packed_rgb_bytes_split_into_rows() {
        let bytes = [255u8, 0, 0, 0, 255, 0, 0, 0, 255, 9, 9, 9];
        let image = Image::rgb_from_bytes(2, &bytes).unwrap();
        assert_eq!(image.height(), 2);
        assert_eq!(
            image,
            Image::Rgb(vec![
                vec![[255, 0, 0], [0, 255, 0]],
                vec![[0, 0, 255], [9, 9, 9]],
            ])
        );
    }

    #[test]
    fn packed_rgba_bytes() {
        let image = Image::rgba_from_bytes(1, &[1, 2, 3, 4]).unwrap();
        assert_eq!(image, Image::Rgba(vec![vec![[1, 2, 3, 4]]]));
    }

    #[test]
    fn partial_pixels_are_rejected() {
        let err = Image::rgb_from_bytes(2, &[1, 2, 3, 4]).unwrap_err();
        assert!(matches!(err, Error::ImageShape { len: 4, row: 6 }));
    }

    #[test]
    fn partial_rows_are_rejected() {
        let err = Image::gray_from_bytes(2, &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::ImageShape { len: 3, row: 2 }));
        assert!(Image::gray_from_bytes(0, &[1]).is_err());
    }

    #[test]
    fn huge_widths_report_a_saturated_row() {
        let err = Image::rgb_from_bytes(usize::MAX, &[1, 2]).unwrap_err();
        assert!(matches!(err, Error::ImageShape { len: 2, row: usize::MAX }));
        let err = Image::rgba_from_bytes(usize::MAX / 2, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap_err();
        assert!(matches!(err, Error::ImageShape { len: 8, row: usize::MAX }));
        let err = Image::gray_from_bytes(usize::MAX, &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::ImageShape { len: 3, row: usize::MAX }));
    }

    #[test]
    fn imshow_keywords() {
        let kwargs = ImshowOptions::new().with_cmap(Colormap::Gray).kwargs();
        assert_eq!(kwargs.to_string(), "cmap='gray'");
    }
}
