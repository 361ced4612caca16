use std::path::Path;

/// A workspace root counts as a Unity project when it has an `Assets`
/// directory at its top level. Integration layers use this to skip
/// activation in unrelated workspaces.
pub async fn is_unity_project(root: impl AsRef<Path>) -> bool {
    tokio::fs::try_exists(root.as_ref().join("Assets"))
        .await
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::is_unity_project;
    use tempfile::tempdir;

    #[tokio::test]
    async fn detects_assets_directory() {
        let temp = tempdir().unwrap();
        assert!(!is_unity_project(temp.path()).await);

        std::fs::create_dir(temp.path().join("Assets")).unwrap();
        assert!(is_unity_project(temp.path()).await);
    }

    #[tokio::test]
    async fn nonexistent_root_is_not_a_project() {
        assert!(!is_unity_project("/no/such/workspace").await);
    }
}
