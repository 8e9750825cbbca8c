//! Backup and Restore Integration Tests
//!
//! Tests for the `.bak` snapshot taken by every write:
//! - Backup content and overwrite semantics
//! - Restoring the previous file
//! - Read-only targets and read-only backups

mod common;

use common::{ServerEntry, TestFixture, TestRecord, set_read_only};
use iniman::{Error, IniSettings, IniSettingsConfig};
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Backup on Write
// =============================================================================

#[test]
fn test_write_backs_up_previous_bytes() {
    let original = "; hand-edited\r\n[TestSection]\r\nTestField=1\r\n";
    let fixture = TestFixture::with_content(original);

    fixture.settings.write(&TestRecord::sample()).unwrap();

    assert_eq!(fs::read(fixture.backup_path()).unwrap(), original.as_bytes());
    assert!(fixture.settings.has_backup());
}

#[test]
fn test_backup_overwritten_on_each_write() {
    let fixture = TestFixture::with_content("[TestSection]\nTestField=1\n");

    let second = TestRecord {
        test_field: 2,
        ..TestRecord::default()
    };
    fixture.settings.write(&second).unwrap();
    let after_first = fixture.file_content();

    fixture.settings.write(&TestRecord::sample()).unwrap();

    assert_eq!(fixture.backup_content().unwrap(), after_first);
}

#[test]
fn test_no_backup_when_primary_missing() {
    let fixture = TestFixture::new();
    fs::remove_file(fixture.settings_path()).unwrap();

    fixture.settings.write(&TestRecord::sample()).unwrap();

    assert!(fixture.settings_path().exists());
    assert!(!fixture.backup_path().exists());
}

#[test]
fn test_list_write_also_backs_up() {
    let fixture = TestFixture::with_content("[TestSection]\nTestField=1\n");

    fixture
        .settings
        .write_list(&[ServerEntry::new("a", 1)])
        .unwrap();

    assert_eq!(
        fixture.backup_content().unwrap(),
        "[TestSection]\nTestField=1\n"
    );
}

#[test]
fn test_custom_backup_extension() {
    let temp_dir = TempDir::new().unwrap();
    let config = IniSettingsConfig::builder("test-app")
        .config_dir(temp_dir.path())
        .backup_extension(".old")
        .build();
    let settings = IniSettings::create(config).unwrap();

    settings.write(&TestRecord::sample()).unwrap();

    assert_eq!(settings.backup_path(), temp_dir.path().join("settings.ini.old"));
    assert!(settings.has_backup());
}

// =============================================================================
// Restore
// =============================================================================

#[test]
fn test_write_then_restore_returns_previous_content() {
    let original = "[TestSection]\nTestField=7\nTestProperty=before\n";
    let fixture = TestFixture::with_content(original);

    fixture.settings.write(&TestRecord::sample()).unwrap();
    assert_ne!(fixture.file_content(), original);

    fixture.settings.restore_from_backup().unwrap();
    assert_eq!(fixture.file_content(), original);

    fixture.settings.reload().unwrap();
    let record: TestRecord = fixture.settings.read().unwrap();
    assert_eq!(record.test_field, 7);
    assert_eq!(record.test_property, "before");
}

#[test]
fn test_restore_without_backup() {
    let fixture = TestFixture::with_content("[TestSection]\nTestField=7\n");

    let err = fixture.settings.restore_from_backup().unwrap_err();
    assert!(matches!(err, Error::BackupNotFound { .. }));
    assert!(err.is_backup_error());
    assert_eq!(fixture.file_content(), "[TestSection]\nTestField=7\n");
}

#[test]
fn test_restore_does_not_touch_cache() {
    let fixture = TestFixture::with_content("[TestSection]\nTestField=1\n");
    fixture
        .settings
        .write(&TestRecord {
            test_field: 2,
            ..TestRecord::default()
        })
        .unwrap();
    fixture.settings.reload().unwrap();

    fixture.settings.restore_from_backup().unwrap();

    assert_eq!(fixture.settings.read::<TestRecord>().unwrap().test_field, 2);
    fixture.settings.reload().unwrap();
    assert_eq!(fixture.settings.read::<TestRecord>().unwrap().test_field, 1);
}

#[test]
fn test_restore_clears_read_only_backup() {
    let fixture = TestFixture::with_content("[TestSection]\nTestField=1\n");
    fixture.settings.write(&TestRecord::sample()).unwrap();
    set_read_only(&fixture.backup_path(), true);

    fixture.settings.restore_from_backup().unwrap();

    assert_eq!(fixture.file_content(), "[TestSection]\nTestField=1\n");
    assert!(!fs::metadata(fixture.backup_path()).unwrap().permissions().readonly());
}

#[test]
fn test_write_over_read_only_backup() {
    let fixture = TestFixture::with_content("[TestSection]\nTestField=1\n");
    fixture.settings.write(&TestRecord::sample()).unwrap();
    set_read_only(&fixture.backup_path(), true);
    let current = fixture.file_content();

    fixture.settings.write(&TestRecord::default()).unwrap();

    assert_eq!(fixture.backup_content().unwrap(), current);
}

// =============================================================================
// Read-only Target
// =============================================================================

#[test]
fn test_read_only_target_denies_write() {
    let fixture = TestFixture::with_content("[TestSection]\nTestField=1\n");
    fixture.settings.write(&TestRecord::sample()).unwrap();
    let primary = fixture.file_content();
    let backup = fixture.backup_content().unwrap();
    set_read_only(&fixture.settings_path(), true);

    let err = fixture.settings.write(&TestRecord::default()).unwrap_err();

    assert!(matches!(err, Error::AccessDenied { .. }));
    assert_eq!(fixture.file_content(), primary);
    assert_eq!(fixture.backup_content().unwrap(), backup);

    set_read_only(&fixture.settings_path(), false);
}

#[test]
fn test_read_only_target_denies_restore() {
    let fixture = TestFixture::with_content("[TestSection]\nTestField=1\n");
    fixture.settings.write(&TestRecord::sample()).unwrap();
    let primary = fixture.file_content();
    set_read_only(&fixture.settings_path(), true);

    let err = fixture.settings.restore_from_backup().unwrap_err();

    assert!(matches!(err, Error::AccessDenied { .. }));
    assert_eq!(fixture.file_content(), primary);

    set_read_only(&fixture.settings_path(), false);
}

#[test]
fn test_read_only_target_still_readable() {
    let fixture = TestFixture::with_content("[TestSection]\nTestField=5\n");
    set_read_only(&fixture.settings_path(), true);

    fixture.settings.invalidate_cache().unwrap();
    assert_eq!(fixture.settings.read::<TestRecord>().unwrap().test_field, 5);

    set_read_only(&fixture.settings_path(), false);
}

#[test]
fn test_write_keeps_permissions() {
    let fixture = TestFixture::with_content("[TestSection]\nTestField=5\n");
    let before = fs::metadata(fixture.settings_path()).unwrap().permissions();

    fixture.settings.write(&TestRecord::sample()).unwrap();

    let after = fs::metadata(fixture.settings_path()).unwrap().permissions();
    assert_eq!(before, after);
}

#[test]
fn test_open_uses_bak_suffix() {
    let temp_dir = TempDir::new().unwrap();
    let settings = IniSettings::open(temp_dir.path().join("app.ini")).unwrap();
    assert_eq!(settings.backup_path(), temp_dir.path().join("app.ini.bak"));
    assert!(!settings.has_backup());
}

// =============================================================================
// Symlinked Settings File
// =============================================================================

#[cfg(unix)]
fn symlinked_fixture(content: &str) -> (TempDir, IniSettings, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let real = temp_dir.path().join("real.ini");
    fs::write(&real, content).unwrap();
    std::os::unix::fs::symlink(&real, temp_dir.path().join("settings.ini")).unwrap();

    let settings = IniSettings::create(common::config_for(temp_dir.path())).unwrap();
    (temp_dir, settings, real)
}

#[cfg(unix)]
#[test]
fn test_write_through_symlink_updates_target() {
    let (temp_dir, settings, real) = symlinked_fixture("[TestSection]\nTestField=1\n");

    settings.write(&TestRecord::sample()).unwrap();

    let link = temp_dir.path().join("settings.ini");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert!(fs::read_to_string(&real).unwrap().contains("TestField=42"));
    assert_eq!(
        fs::read_to_string(settings.backup_path()).unwrap(),
        "[TestSection]\nTestField=1\n"
    );

    settings.reload().unwrap();
    assert_eq!(settings.read::<TestRecord>().unwrap(), TestRecord::sample());
}

#[cfg(unix)]
#[test]
fn test_restore_through_symlink_updates_target() {
    let (temp_dir, settings, real) = symlinked_fixture("[TestSection]\nTestField=1\n");
    settings.write(&TestRecord::sample()).unwrap();

    settings.restore_from_backup().unwrap();

    let link = temp_dir.path().join("settings.ini");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_to_string(&real).unwrap(), "[TestSection]\nTestField=1\n");
}

#[test]
fn test_restore_keeps_permissions() {
    let fixture = TestFixture::with_content("[TestSection]\nTestField=1\n");
    fixture.settings.write(&TestRecord::sample()).unwrap();
    let before = fs::metadata(fixture.settings_path()).unwrap().permissions();

    fixture.settings.restore_from_backup().unwrap();

    let after = fs::metadata(fixture.settings_path()).unwrap().permissions();
    assert_eq!(before, after);
    assert_eq!(fixture.file_content(), "[TestSection]\nTestField=1\n");
}

#[test]
fn test_restore_recreates_deleted_primary() {
    let fixture = TestFixture::with_content("[TestSection]\nTestField=1\n");
    fixture.settings.write(&TestRecord::sample()).unwrap();
    fs::remove_file(fixture.settings_path()).unwrap();

    fixture.settings.restore_from_backup().unwrap();

    assert_eq!(fixture.file_content(), "[TestSection]\nTestField=1\n");
}
