use assetio_types::{AssetInfo, ResolvedPath, WriteMode};

#[test]
fn empty_path_is_empty() {
    assert!(ResolvedPath::empty().is_empty());
    assert!(ResolvedPath::default().is_empty());
    assert!(!ResolvedPath::new("/a.usd").is_empty());
}

#[test]
fn display_matches_inner_string() {
    let path = ResolvedPath::from("/shared/assets/model.usd");
    assert_eq!(path.to_string(), "/shared/assets/model.usd");
    assert_eq!(path.as_str(), "/shared/assets/model.usd");
}

#[test]
fn serializes_transparently() {
    let path = ResolvedPath::new("bal:///cube");
    let json = serde_json::to_string(&path).unwrap();
    assert_eq!(json, r#""bal:///cube""#);
    let back: ResolvedPath = serde_json::from_str(&json).unwrap();
    assert_eq!(back, path);
}

#[test]
fn asset_info_deserializes_with_defaults() {
    let info: AssetInfo = serde_json::from_str(r#"{"asset_name":"cube.usd"}"#).unwrap();
    assert_eq!(info.asset_name, "cube.usd");
    assert_eq!(info.version, None);
    assert!(info.resolver_info.is_null());
}

#[test]
fn write_mode_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&WriteMode::Replace).unwrap(), r#""replace""#);
    assert_eq!(
        serde_json::from_str::<WriteMode>(r#""update""#).unwrap(),
        WriteMode::Update
    );
}
