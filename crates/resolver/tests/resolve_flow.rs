use guid_peek_indexer::Guid;
use guid_peek_resolver::{GuidResolver, MISSING_TEXT};
use tempfile::TempDir;

const PLAYER_GUID: &str = "0ef2e22c39155c943b015dcf2f79bb99";
const UNKNOWN_GUID: &str = "deadbeefdeadbeefdeadbeefdeadbeef";

fn guid(s: &str) -> Guid {
    s.parse().expect("guid")
}

/// Project with one prefab and its sidecar under Assets/.
async fn unity_fixture() -> TempDir {
    let temp = TempDir::new().expect("tempdir");
    let assets = temp.path().join("Assets");
    tokio::fs::create_dir_all(&assets).await.expect("create assets");
    tokio::fs::write(assets.join("Player.prefab"), b"")
        .await
        .expect("write asset");
    tokio::fs::write(
        assets.join("Player.prefab.meta"),
        format!("fileFormatVersion: 2\nguid: {PLAYER_GUID}\n"),
    )
    .await
    .expect("write meta");
    temp
}

#[tokio::test]
async fn resolves_known_guid_to_relative_path() -> anyhow::Result<()> {
    let temp = unity_fixture().await;
    let resolver = GuidResolver::new(temp.path());

    let record = resolver.resolve(&guid(PLAYER_GUID)).await.expect("record");
    assert_eq!(record.path, "Assets/Player.prefab");

    Ok(())
}

#[tokio::test]
async fn repeated_lookups_scan_exactly_once() -> anyhow::Result<()> {
    let temp = unity_fixture().await;
    let resolver = GuidResolver::new(temp.path());
    assert_eq!(resolver.scans_performed(), 0);

    let first = resolver.resolve(&guid(PLAYER_GUID)).await;
    let second = resolver.resolve(&guid(PLAYER_GUID)).await;
    resolver.resolve(&guid(UNKNOWN_GUID)).await;

    assert_eq!(first, second);
    assert_eq!(resolver.scans_performed(), 1);

    Ok(())
}

#[tokio::test]
async fn concurrent_first_callers_share_one_build() -> anyhow::Result<()> {
    let temp = unity_fixture().await;
    let resolver = GuidResolver::new(temp.path());

    let guid_a = guid(PLAYER_GUID);
    let guid_b = guid(PLAYER_GUID);
    let (a, b) = tokio::join!(resolver.resolve(&guid_a), resolver.resolve(&guid_b));

    assert_eq!(a, b);
    assert_eq!(resolver.scans_performed(), 1);

    Ok(())
}

#[tokio::test]
async fn teardown_forces_exactly_one_new_scan() -> anyhow::Result<()> {
    let temp = unity_fixture().await;
    let resolver = GuidResolver::new(temp.path());

    resolver.resolve(&guid(PLAYER_GUID)).await;
    resolver.teardown().await;
    resolver.resolve(&guid(PLAYER_GUID)).await;
    resolver.resolve(&guid(PLAYER_GUID)).await;

    assert_eq!(resolver.scans_performed(), 2);

    Ok(())
}

#[tokio::test]
async fn empty_root_still_counts_as_indexed() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let resolver = GuidResolver::new(temp.path());

    assert_eq!(resolver.resolve(&guid(UNKNOWN_GUID)).await, None);
    assert_eq!(resolver.resolve(&guid(UNKNOWN_GUID)).await, None);
    assert_eq!(resolver.scans_performed(), 1);

    Ok(())
}

#[tokio::test]
async fn deleted_asset_resolves_to_absent() -> anyhow::Result<()> {
    let temp = unity_fixture().await;
    let resolver = GuidResolver::new(temp.path());

    assert!(resolver.resolve(&guid(PLAYER_GUID)).await.is_some());

    // Index is now stale; the record must not leak a dangling path.
    tokio::fs::remove_file(temp.path().join("Assets/Player.prefab")).await?;
    assert_eq!(resolver.resolve(&guid(PLAYER_GUID)).await, None);

    Ok(())
}

#[tokio::test]
async fn definition_points_at_file_start() -> anyhow::Result<()> {
    let temp = unity_fixture().await;
    let resolver = GuidResolver::new(temp.path());

    let location = resolver.definition(PLAYER_GUID).await.expect("location");
    assert_eq!(location.path, temp.path().join("Assets/Player.prefab"));
    assert_eq!((location.line, location.column), (0, 0));

    assert_eq!(resolver.definition("not a guid").await, None);
    assert_eq!(resolver.definition(UNKNOWN_GUID).await, None);

    Ok(())
}

#[tokio::test]
async fn hover_reports_path_or_missing() -> anyhow::Result<()> {
    let temp = unity_fixture().await;
    let resolver = GuidResolver::new(temp.path());

    assert_eq!(
        resolver.hover(PLAYER_GUID).await.as_deref(),
        Some("Assets/Player.prefab")
    );
    assert_eq!(
        resolver.hover(UNKNOWN_GUID).await.as_deref(),
        Some(MISSING_TEXT)
    );
    assert_eq!(resolver.hover("0EF2E22C39155C943B015DCF2F79BB99").await, None);
    assert_eq!(resolver.hover("player").await, None);

    Ok(())
}
