use webworker::http::mime::{content_type, extension_of};

#[test]
fn test_mapped_extensions() {
    assert_eq!(content_type(Some("jpg")), Some("image/jpeg"));
    assert_eq!(content_type(Some("png")), Some("image/png"));
    assert_eq!(content_type(Some("gif")), Some("image/gif"));
    assert_eq!(content_type(Some("html")), Some("text/html"));
}

#[test]
fn test_text_is_served_as_html() {
    assert_eq!(content_type(Some("txt")), Some("text/html"));
}

#[test]
fn test_unmapped_extensions() {
    assert_eq!(content_type(Some("css")), None);
    assert_eq!(content_type(Some("jpeg")), None);
    assert_eq!(content_type(Some("HTML")), None);
    assert_eq!(content_type(None), None);
}

#[test]
fn test_extension_of_request_paths() {
    assert_eq!(extension_of("/index.html"), Some("html"));
    assert_eq!(extension_of("./test/pic.gif"), Some("gif"));
    assert_eq!(extension_of("./archive.tar.gz"), Some("gz"));
    assert_eq!(extension_of("/"), None);
    assert_eq!(extension_of("/docs/readme"), None);
}

#[test]
fn test_same_extension_drives_lookup_for_any_depth() {
    for path in ["./a.png", "./dir/a.png", "./dir/sub/a.png", "/a.b/c.png"] {
        assert_eq!(content_type(extension_of(path)), Some("image/png"), "{path}");
    }
}
