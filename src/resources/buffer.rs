use std::sync::atomic::{AtomicU64, Ordering};

use bytemuck::Pod;
use parking_lot::RwLock;

// Global buffer ID generator.
static NEXT_BUFFER_ID: AtomicU64 = AtomicU64::new(0);

/// CPU-side shadow of a GPU uniform buffer.
///
/// Holds the byte image of a uniform block together with a monotonic version
/// counter. Every write bumps the version so a renderer can dirty-check which
/// buffers need re-uploading; the upload itself happens outside this layer.
#[derive(Debug)]
pub struct UniformBuffer {
    id: u64,
    label: String,
    version: AtomicU64,
    data: RwLock<Vec<u8>>,
    usage: wgpu::BufferUsages,
}

impl UniformBuffer {
    /// Creates a buffer initialized from a `Pod` value.
    pub fn new<T: Pod>(value: &T, usage: wgpu::BufferUsages, label: Option<&str>) -> Self {
        Self {
            id: NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed),
            label: label.unwrap_or("UniformBuffer").to_string(),
            version: AtomicU64::new(0),
            data: RwLock::new(bytemuck::bytes_of(value).to_vec()),
            usage,
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn usage(&self) -> wgpu::BufferUsages {
        self.usage
    }

    /// Lock-free version read.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Overwrites the whole buffer with a `Pod` value.
    pub fn update<T: Pod>(&self, value: &T) {
        {
            let mut data = self.data.write();
            data.clear();
            data.extend_from_slice(bytemuck::bytes_of(value));
        }
        self.version.fetch_add(1, Ordering::Relaxed);
    }

    /// Writes `bytes` at `offset`. Panics if the range is out of bounds.
    pub fn write_at(&self, offset: usize, bytes: &[u8]) {
        {
            let mut data = self.data.write();
            data[offset..offset + bytes.len()].copy_from_slice(bytes);
        }
        self.version.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshots the buffer as a `Pod` value.
    ///
    /// Panics if the buffer is shorter than `T`.
    #[must_use]
    pub fn read<T: Pod>(&self) -> T {
        let data = self.data.read();
        bytemuck::pod_read_unaligned(&data[..std::mem::size_of::<T>()])
    }

    /// Snapshots the raw bytes for upload.
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        self.data.read().clone()
    }
}
