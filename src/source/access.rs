use crate::db::pool::DbPool;
use crate::db::schema::has_calendar_schema;
use crate::models::access::AccessResult;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

/// Decide whether the calendar store at `path` can be read.
///
/// - missing file → `Restricted`
/// - the OS refuses to read it → `Denied`
/// - not a calendar store, or any other failure → `Unknown`
pub fn check_store_access(path: &Path) -> AccessResult {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return AccessResult::Unknown,
        Err(e) => return from_io(e.kind()),
    }

    if let Err(e) = File::open(path) {
        return from_io(e.kind());
    }

    let pool = match DbPool::open_read_only(path) {
        Ok(p) => p,
        Err(e) => {
            log::warn!("cannot open calendar store {}: {}", path.display(), e);
            return AccessResult::Unknown;
        }
    };

    match has_calendar_schema(&pool.conn) {
        Ok(true) => AccessResult::Granted,
        Ok(false) => {
            log::warn!("{} has no calendar tables", path.display());
            AccessResult::Unknown
        }
        Err(e) => {
            log::warn!("cannot read calendar store {}: {}", path.display(), e);
            AccessResult::Unknown
        }
    }
}

fn from_io(kind: ErrorKind) -> AccessResult {
    match kind {
        ErrorKind::NotFound => AccessResult::Restricted,
        ErrorKind::PermissionDenied => AccessResult::Denied,
        _ => AccessResult::Unknown,
    }
}
