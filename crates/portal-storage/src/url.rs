//! Object-store URL parsing.
//!
//! Stored file references are Supabase Storage URLs of the form
//! `https://<host>/storage/v1/object/<public|sign>/<bucket>/<path...>`,
//! optionally carrying a `?token=...` query.

use reqwest::Url;

/// A parsed (bucket, path) pair within the object store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    /// Bucket name.
    pub bucket: String,
    /// Object path within the bucket.
    pub path: String,
}

/// Extract bucket and path from an object-store URL.
///
/// Locates the first path segment literally equal to `object`; the next
/// segment is the access type (`public`, `sign`, ...), the one after it
/// the bucket, and everything remaining the object path. Returns `None`
/// for malformed URLs, URLs without an `object` segment, or URLs that
/// terminate before a bucket exists.
pub fn parse_storage_url(url: &str) -> Option<StorageLocation> {
    let parsed = Url::parse(url).ok()?;
    let segments: Vec<&str> = parsed.path_segments()?.collect();

    let object_index = segments.iter().position(|segment| *segment == "object")?;

    let access_type_index = object_index + 1;
    if access_type_index >= segments.len() {
        return None;
    }

    let bucket_index = access_type_index + 1;
    if bucket_index >= segments.len() {
        return None;
    }

    Some(StorageLocation {
        bucket: segments[bucket_index].to_string(),
        path: segments[bucket_index + 1..].join("/"),
    })
}

/// Derive a display file name from a stored file URL.
///
/// Takes the trailing path segment of a plain URL parse, falling back to
/// the storage-URL parse, and finally to the literal name `"file"`.
pub fn file_name_from_url(url: &str) -> String {
    if let Ok(parsed) = Url::parse(url) {
        if let Some(last) = parsed.path_segments().and_then(|segments| segments.last()) {
            if !last.is_empty() {
                return last.to_string();
            }
        }
    }

    if let Some(location) = parse_storage_url(url) {
        if let Some(name) = location.path.rsplit('/').next() {
            if !name.is_empty() {
                return name.to_string();
            }
        }
    }

    "file".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_public_url() {
        let location =
            parse_storage_url("https://x.supabase.co/storage/v1/object/public/docs/a/b.pdf")
                .unwrap();
        assert_eq!(location.bucket, "docs");
        assert_eq!(location.path, "a/b.pdf");
    }

    #[test]
    fn test_parse_signed_url_with_token() {
        let location = parse_storage_url(
            "https://x.supabase.co/storage/v1/object/sign/docs/reports/q3.pdf?token=abc123",
        )
        .unwrap();
        assert_eq!(location.bucket, "docs");
        assert_eq!(location.path, "reports/q3.pdf");
    }

    #[test]
    fn test_parse_rejects_url_without_object_segment() {
        assert_eq!(
            parse_storage_url("https://x.co/no-object-segment/file.pdf"),
            None
        );
    }

    #[test]
    fn test_parse_rejects_truncated_url() {
        assert_eq!(
            parse_storage_url("https://x.supabase.co/storage/v1/object"),
            None
        );
        assert_eq!(
            parse_storage_url("https://x.supabase.co/storage/v1/object/public"),
            None
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_storage_url("not a url"), None);
        assert_eq!(parse_storage_url(""), None);
    }

    #[test]
    fn test_file_name_from_plain_url() {
        assert_eq!(
            file_name_from_url("https://x.supabase.co/storage/v1/object/public/docs/a/b.pdf"),
            "b.pdf"
        );
    }

    #[test]
    fn test_file_name_ignores_query() {
        assert_eq!(
            file_name_from_url("https://x.supabase.co/storage/v1/object/sign/docs/c.pdf?token=t"),
            "c.pdf"
        );
    }

    #[test]
    fn test_file_name_defaults_to_file() {
        assert_eq!(file_name_from_url("not a url"), "file");
        assert_eq!(file_name_from_url("https://x.co/"), "file");
    }
}
