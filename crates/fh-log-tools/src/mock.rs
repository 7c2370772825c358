//! In-memory log fixtures.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{LogError, LogResult};
use crate::source::LogSource;
use crate::text::decode_lossy;

/// Serves raw log bytes by path, decoded like files on disk.
#[derive(Default)]
pub struct MockLogSource {
    files: HashMap<String, Vec<u8>>,
}

impl MockLogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a log made of `lines` joined with `\n`.
    pub fn add_file(&mut self, path: impl Into<String>, lines: &[&str]) {
        self.add_bytes(path, lines.join("\n").into_bytes());
    }

    /// Register raw bytes; invalid UTF-8 is dropped when read.
    pub fn add_bytes(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), bytes.into());
    }

    /// Firmware update log that ends in a memory fault.
    pub fn with_memory_fault_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/var/log/fw-update.log",
            &[
                "[    0.000000] Booting firmware v2.4.1",
                "[    1.204113] ota: downloading package (4.2 MiB)",
                "[    3.551020] ota: ERROR alloc failed for decompression buffer",
                "[    3.551098] ota: retrying with smaller window",
                "[    4.880215] ota: ERROR out of memory while verifying signature",
                "[    4.880301] Segmentation fault at 0x00",
            ],
        );
        m
    }

    /// Boot log where the watchdog and bootloader keep failing.
    pub fn with_boot_fault_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/var/log/boot.log",
            &[
                "U-Boot 2023.04 (Jan 15 2024)",
                "bootloader: ERROR invalid image header",
                "net: ERROR dhcp timeout on eth0",
                "watchdog: error, no heartbeat from init",
                "net: ERROR connection reset by peer",
                "Kernel panic - not syncing: VFS: Unable to mount root fs",
            ],
        );
        m
    }

    /// A quiet log with no error markers.
    pub fn with_clean_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/var/log/clean.log",
            &[
                "[    0.000000] Booting firmware v2.4.1",
                "[    0.812000] eth0: link up",
                "[    1.100000] app: service started",
            ],
        );
        m
    }
}

#[async_trait]
impl LogSource for MockLogSource {
    async fn read_text(&self, path: &str) -> LogResult<String> {
        match self.files.get(path) {
            Some(bytes) => Ok(decode_lossy(bytes)),
            None => Err(LogError::NotFound(path.to_string())),
        }
    }
}
