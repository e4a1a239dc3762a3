//! Transient per-frame buffer allocation.
//!
//! Buffer builders never own the memory they pack into. They borrow a
//! [`TransientAllocator`] for the duration of one call, emplace vertex and
//! index data into it, and hand back [`BufferView`]s into its storage. The
//! allocator's owner decides when that storage is recycled (typically once
//! per frame, after the GPU is done reading it).
//!
//! [`HostTransientBuffer`] is a growable host-memory arena implementing the
//! trait, suitable for staging uploads and for tests.
//!
//! # Example
//!
//! ```
//! use redlilium_geometry::transient::{HostTransientBuffer, TransientAllocator};
//!
//! let mut arena = HostTransientBuffer::new();
//! let indices: [u16; 3] = [0, 1, 2];
//! let view = arena.emplace(bytemuck::cast_slice(&indices), 2);
//! assert_eq!(arena.bytes(&view), bytemuck::cast_slice::<u16, u8>(&indices));
//!
//! // End of frame: every view handed out so far becomes invalid.
//! arena.reset();
//! ```

/// A region inside a transient allocator's storage.
///
/// Views are plain offsets; they are only meaningful for the allocator that
/// produced them and only until that allocator is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BufferView {
    /// Byte offset into the allocator's storage.
    pub offset: u64,
    /// Size of the region in bytes.
    pub size: u64,
}

impl BufferView {
    /// Create a new buffer view.
    pub fn new(offset: u64, size: u64) -> Self {
        Self { offset, size }
    }

    /// Get the end offset (offset + size).
    pub fn end(&self) -> u64 {
        self.offset + self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// Append-only storage for one frame's vertex and index data.
///
/// Alignments must be powers of two. Implementations never fail; running
/// out of backing memory is the owner's concern.
pub trait TransientAllocator {
    /// Copy `data` into fresh storage aligned to `alignment`.
    fn emplace(&mut self, data: &[u8], alignment: usize) -> BufferView;

    /// Reserve `size` bytes aligned to `alignment` and let `fill` write them.
    ///
    /// `fill` receives a writable region of exactly `size` bytes.
    fn emplace_with(
        &mut self,
        size: usize,
        alignment: usize,
        fill: &mut dyn FnMut(&mut [u8]),
    ) -> BufferView;
}

/// A growable host-memory bump arena.
///
/// Allocation offsets are aligned relative to the start of the arena, the
/// same convention GPU buffer offsets use, so the whole arena can be uploaded
/// as one buffer and the views used as offsets into it.
///
/// # Thread Safety
///
/// `HostTransientBuffer` is NOT thread-safe. Use one arena per recording
/// thread, or wrap it in a mutex.
pub struct HostTransientBuffer {
    data: Vec<u8>,
    frame_count: u64,
}

impl HostTransientBuffer {
    /// Default initial reservation (64 KB).
    pub const DEFAULT_CAPACITY: usize = 64 * 1024;

    /// Create an arena with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) reserved.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an arena with `capacity` bytes reserved up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            frame_count: 0,
        }
    }

    /// Get the amount of space used since the last reset.
    pub fn used(&self) -> usize {
        self.data.len()
    }

    /// Get the bytes currently reserved without reallocation.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Get the number of completed frames (resets of a non-empty arena).
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// All bytes written since the last reset, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Read back the bytes of a view.
    ///
    /// # Panics
    ///
    /// Panics if the view lies outside the bytes written since the last reset.
    pub fn bytes(&self, view: &BufferView) -> &[u8] {
        &self.data[view.offset as usize..view.end() as usize]
    }

    /// Reset the arena to the beginning, keeping its allocation.
    ///
    /// # Warning
    ///
    /// Every [`BufferView`] handed out before the reset is invalidated.
    pub fn reset(&mut self) {
        if !self.data.is_empty() {
            self.frame_count += 1;
            self.data.clear();
        }
    }

    /// Grow the arena by `size` zeroed bytes at the next `alignment` boundary.
    fn bump(&mut self, size: usize, alignment: usize) -> BufferView {
        debug_assert!(alignment.is_power_of_two(), "alignment must be power of 2");

        if size == 0 {
            return BufferView::new(self.data.len() as u64, 0);
        }

        let offset = align_up(self.data.len(), alignment);
        self.data.resize(offset + size, 0);
        BufferView::new(offset as u64, size as u64)
    }
}

impl TransientAllocator for HostTransientBuffer {
    fn emplace(&mut self, data: &[u8], alignment: usize) -> BufferView {
        let view = self.bump(data.len(), alignment);
        if !view.is_empty() {
            self.data[view.offset as usize..view.end() as usize].copy_from_slice(data);
        }
        view
    }

    fn emplace_with(
        &mut self,
        size: usize,
        alignment: usize,
        fill: &mut dyn FnMut(&mut [u8]),
    ) -> BufferView {
        let view = self.bump(size, alignment);
        if !view.is_empty() {
            fill(&mut self.data[view.offset as usize..view.end() as usize]);
        }
        view
    }
}

impl Default for HostTransientBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HostTransientBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostTransientBuffer")
            .field("used", &self.data.len())
            .field("capacity", &self.data.capacity())
            .field("frame_count", &self.frame_count)
            .finish()
    }
}

/// Align a value up to the given alignment.
#[inline]
fn align_up(value: usize, alignment: usize) -> usize {
    debug_assert!(alignment.is_power_of_two());
    (value + alignment - 1) & !(alignment - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_creation() {
        let arena = HostTransientBuffer::with_capacity(4096);
        assert!(arena.capacity() >= 4096);
        assert_eq!(arena.used(), 0);
        assert_eq!(arena.frame_count(), 0);
    }

    #[test]
    fn test_emplace_copies_bytes() {
        let mut arena = HostTransientBuffer::new();
        let view = arena.emplace(&[1, 2, 3, 4, 5], 1);
        assert_eq!(view, BufferView::new(0, 5));
        assert_eq!(arena.bytes(&view), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_emplace_alignment() {
        let mut arena = HostTransientBuffer::new();

        let first = arena.emplace(&[0xAA; 3], 1);
        assert_eq!(first.offset, 0);
        assert_eq!(arena.used(), 3);

        // Next allocation should be aligned to 4
        let second = arena.emplace(&[0xBB; 8], 4);
        assert_eq!(second.offset, 4);
        assert_eq!(arena.used(), 12);

        // Padding is zeroed
        assert_eq!(arena.as_bytes()[3], 0);

        let third = arena.emplace(&[0xCC; 2], 16);
        assert_eq!(third.offset, 16);
        assert_eq!(arena.bytes(&second), &[0xBB; 8]);
    }

    #[test]
    fn test_emplace_with_fill() {
        let mut arena = HostTransientBuffer::new();
        let mut calls = 0;
        let view = arena.emplace_with(6, 2, &mut |region: &mut [u8]| {
            calls += 1;
            assert_eq!(region.len(), 6);
            for (i, byte) in region.iter_mut().enumerate() {
                *byte = i as u8 * 10;
            }
        });
        assert_eq!(calls, 1);
        assert_eq!(arena.bytes(&view), &[0, 10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_zero_allocation() {
        let mut arena = HostTransientBuffer::new();
        arena.emplace(&[7; 3], 1);

        let mut called = false;
        let view = arena.emplace_with(0, 4, &mut |_: &mut [u8]| called = true);
        assert!(view.is_empty());
        assert!(!called);
        // Zero-sized allocations don't advance the arena
        assert_eq!(arena.used(), 3);
    }

    #[test]
    fn test_reset() {
        let mut arena = HostTransientBuffer::new();
        arena.reset();
        assert_eq!(arena.frame_count(), 0);

        arena.emplace(&[1; 256], 4);
        arena.reset();
        assert_eq!(arena.used(), 0);
        assert_eq!(arena.frame_count(), 1);

        // Can allocate again from the start
        let view = arena.emplace(&[2; 16], 4);
        assert_eq!(view.offset, 0);
    }

    #[test]
    fn test_arena_grows_past_capacity() {
        let mut arena = HostTransientBuffer::with_capacity(8);
        let view = arena.emplace(&[9; 100], 4);
        assert_eq!(view.size, 100);
        assert_eq!(arena.used(), 100);
    }

    #[test]
    fn test_align_up() {
        assert_eq!(align_up(0, 256), 0);
        assert_eq!(align_up(1, 256), 256);
        assert_eq!(align_up(255, 256), 256);
        assert_eq!(align_up(256, 256), 256);
        assert_eq!(align_up(257, 256), 512);
        assert_eq!(align_up(100, 64), 128);
    }
}
