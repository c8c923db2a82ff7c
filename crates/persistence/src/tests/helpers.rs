// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique state file names, so tests never share a file.
static FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Returns a fresh state file path under the system temp directory.
pub fn create_test_path() -> PathBuf {
    let id: u64 = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir()
        .join(format!("conges-test-{}", std::process::id()))
        .join(format!("state-{id}.json"))
}
