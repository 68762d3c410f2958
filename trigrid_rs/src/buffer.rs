//! Dense host buffers for interpolation calls.
//!
//! Each buffer is a flat, contiguous array tagged with its shape and an
//! execution arena. Constructors validate the flat length against the
//! declared shape, so the dispatch layer only ever checks cross-buffer
//! consistency. Inputs are read-only during a call; outputs are freshly
//! allocated per call and written exactly once per element.

use trigrid_core::{Scalar, CORNER_COUNT};

use crate::error::{Result, TrigridError};

/// Number of coordinates per query point.
pub(crate) const POINT_DIMS: usize = 3;

/// Execution-arena tag carried by every buffer.
///
/// All arguments to one call must share one arena. On this host-only runtime
/// the tag is an opaque id — [`Arena::HOST`] unless the caller partitions
/// its memory into multiple pools — but the consistency check mirrors what a
/// device-resident runtime would enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arena(pub u32);

impl Arena {
    /// The default host arena.
    pub const HOST: Arena = Arena(0);
}

impl Default for Arena {
    fn default() -> Self {
        Self::HOST
    }
}

/// Allocate a zero-filled Vec, surfacing allocation failure as an error
/// instead of an abort.
fn try_zeroed_vec<T: Scalar>(elements: usize) -> Result<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(elements)
        .map_err(|_| TrigridError::AllocationFailure { elements })?;
    data.resize(elements, T::zero());
    Ok(data)
}

/// Per-corner values for a batch of cubes, shape (cubes, 8, channels).
///
/// Holds the input corner features of a forward call and the output corner
/// gradients of a backward call. Corner order follows
/// [`trigrid_core::corner_position`].
#[derive(Debug, Clone, PartialEq)]
pub struct CornerField<T> {
    data: Vec<T>,
    cubes: usize,
    channels: usize,
    arena: Arena,
}

impl<T: Scalar> CornerField<T> {
    /// Wrap a flat row-major (cube, corner, channel) array.
    pub fn from_vec(data: Vec<T>, cubes: usize, channels: usize, arena: Arena) -> Result<Self> {
        let expected = cubes * CORNER_COUNT * channels;
        if data.len() != expected {
            return Err(TrigridError::ShapeMismatch {
                len: data.len(),
                shape: vec![cubes, CORNER_COUNT, channels],
            });
        }
        Ok(Self {
            data,
            cubes,
            channels,
            arena,
        })
    }

    /// Allocate a zero-filled field, e.g. as a gradient output.
    pub(crate) fn try_zeroed(cubes: usize, channels: usize, arena: Arena) -> Result<Self> {
        Ok(Self {
            data: try_zeroed_vec(cubes * CORNER_COUNT * channels)?,
            cubes,
            channels,
            arena,
        })
    }

    /// Number of cubes in the batch.
    pub fn cubes(&self) -> usize {
        self.cubes
    }

    /// Number of feature channels per corner.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// The execution arena this buffer is tagged with.
    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// The flat (cube, corner, channel) backing slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Read a single element.
    pub fn get(&self, cube: usize, corner: usize, channel: usize) -> T {
        self.data[(cube * CORNER_COUNT + corner) * self.channels + channel]
    }

    /// Gather the 8 corner values of one (cube, channel) column.
    pub(crate) fn corner_column(&self, cube: usize, channel: usize) -> [T; CORNER_COUNT] {
        let base = cube * CORNER_COUNT * self.channels + channel;
        std::array::from_fn(|corner| self.data[base + corner * self.channels])
    }

    /// Consume the field, returning the flat backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

/// Query points for a batch of cubes, shape (cubes, 3).
///
/// Coordinates are nominally in [-1, 1]^3; out-of-range points extrapolate
/// rather than error.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPoints<T> {
    data: Vec<T>,
    cubes: usize,
    arena: Arena,
}

impl<T: Scalar> QueryPoints<T> {
    /// Wrap a flat row-major (cube, axis) array.
    pub fn from_vec(data: Vec<T>, cubes: usize, arena: Arena) -> Result<Self> {
        let expected = cubes * POINT_DIMS;
        if data.len() != expected {
            return Err(TrigridError::ShapeMismatch {
                len: data.len(),
                shape: vec![cubes, POINT_DIMS],
            });
        }
        Ok(Self { data, cubes, arena })
    }

    /// Number of cubes in the batch.
    pub fn cubes(&self) -> usize {
        self.cubes
    }

    /// The execution arena this buffer is tagged with.
    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// The flat (cube, axis) backing slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Read the query point of one cube.
    pub fn point(&self, cube: usize) -> [T; POINT_DIMS] {
        let base = cube * POINT_DIMS;
        [self.data[base], self.data[base + 1], self.data[base + 2]]
    }
}

/// One scalar per (cube, channel), shape (cubes, channels).
///
/// Holds the interpolated output of a forward call and the upstream gradient
/// fed into a backward call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelField<T> {
    data: Vec<T>,
    cubes: usize,
    channels: usize,
    arena: Arena,
}

impl<T: Scalar> ChannelField<T> {
    /// Wrap a flat row-major (cube, channel) array.
    pub fn from_vec(data: Vec<T>, cubes: usize, channels: usize, arena: Arena) -> Result<Self> {
        let expected = cubes * channels;
        if data.len() != expected {
            return Err(TrigridError::ShapeMismatch {
                len: data.len(),
                shape: vec![cubes, channels],
            });
        }
        Ok(Self {
            data,
            cubes,
            channels,
            arena,
        })
    }

    /// Allocate a zero-filled field, e.g. as a forward output.
    pub(crate) fn try_zeroed(cubes: usize, channels: usize, arena: Arena) -> Result<Self> {
        Ok(Self {
            data: try_zeroed_vec(cubes * channels)?,
            cubes,
            channels,
            arena,
        })
    }

    /// Number of cubes in the batch.
    pub fn cubes(&self) -> usize {
        self.cubes
    }

    /// Number of feature channels.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// The execution arena this buffer is tagged with.
    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// The flat (cube, channel) backing slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Read a single element.
    pub fn get(&self, cube: usize, channel: usize) -> T {
        self.data[cube * self.channels + channel]
    }

    /// Consume the field, returning the flat backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_field_rejects_bad_length() {
        let err = CornerField::<f32>::from_vec(vec![0.0; 10], 2, 3, Arena::HOST).unwrap_err();
        match err {
            TrigridError::ShapeMismatch { len, shape } => {
                assert_eq!(len, 10);
                assert_eq!(shape, vec![2, 8, 3]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn query_points_reject_bad_length() {
        assert!(QueryPoints::<f32>::from_vec(vec![0.0; 7], 2, Arena::HOST).is_err());
        assert!(QueryPoints::<f32>::from_vec(vec![0.0; 6], 2, Arena::HOST).is_ok());
    }

    #[test]
    fn corner_column_gathers_in_corner_order() {
        // 1 cube, 2 channels; element (corner, channel) stored as corner*10 + channel.
        let data: Vec<f32> = (0..CORNER_COUNT)
            .flat_map(|corner| (0..2).map(move |ch| (corner * 10 + ch) as f32))
            .collect();
        let field = CornerField::from_vec(data, 1, 2, Arena::HOST).unwrap();

        let column = field.corner_column(0, 1);
        for (corner, &value) in column.iter().enumerate() {
            assert_eq!(value, (corner * 10 + 1) as f32);
        }
    }

    #[test]
    fn channel_field_indexing_round_trips() {
        let data: Vec<f64> = (0..6).map(|i| i as f64).collect();
        let field = ChannelField::from_vec(data, 2, 3, Arena::HOST).unwrap();
        assert_eq!(field.get(0, 0), 0.0);
        assert_eq!(field.get(1, 2), 5.0);
        assert_eq!(field.into_vec().len(), 6);
    }

    #[test]
    fn zero_sized_fields_are_valid() {
        let field = ChannelField::<f32>::from_vec(Vec::new(), 0, 4, Arena::HOST).unwrap();
        assert_eq!(field.cubes(), 0);

        let field = CornerField::<f32>::from_vec(Vec::new(), 3, 0, Arena::HOST).unwrap();
        assert_eq!(field.channels(), 0);
    }
}
