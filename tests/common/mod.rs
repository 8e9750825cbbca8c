//! Common test utilities for iniman integration tests
//!
//! Provides shared record types, fixtures, and helper functions.

#![allow(dead_code)]

use iniman::{Binding, IniEnum, IniSection, IniSettings, IniSettingsConfig, IniValue, LineEnding};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =============================================================================
// Test Records
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestEnum {
    #[default]
    FirstValue,
    SecondValue,
    ThirdValue,
}

impl IniEnum for TestEnum {
    const VARIANTS: &'static [&'static str] = &["FirstValue", "SecondValue", "ThirdValue"];

    fn variant_name(&self) -> &'static str {
        match self {
            TestEnum::FirstValue => "FirstValue",
            TestEnum::SecondValue => "SecondValue",
            TestEnum::ThirdValue => "ThirdValue",
        }
    }

    fn from_variant_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TestEnum::FirstValue),
            1 => Some(TestEnum::SecondValue),
            2 => Some(TestEnum::ThirdValue),
            _ => None,
        }
    }
}

impl IniValue for TestEnum {
    fn kind() -> iniman::ValueKind {
        iniman::ValueKind::Enum(Self::VARIANTS)
    }

    fn to_ini(&self) -> String {
        iniman::enum_to_ini(self)
    }

    fn from_ini(raw: &str) -> Result<Self, iniman::CoercionError> {
        iniman::enum_from_ini(raw)
    }
}

/// Record bound to `[TestSection]`, covering every value kind
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TestRecord {
    pub test_field: i32,
    pub test_property: String,
    pub test_enum_field: TestEnum,
    pub ratio: f64,
    pub enabled: bool,
    /// never bound
    pub transient: String,
}

impl IniSection for TestRecord {
    fn binding() -> Binding<Self> {
        Binding::new("TestSection")
            .field(
                "TestField",
                "test_field",
                |r: &Self| &r.test_field,
                |r: &mut Self| &mut r.test_field,
            )
            .field(
                "TestProperty",
                "test_property",
                |r: &Self| &r.test_property,
                |r: &mut Self| &mut r.test_property,
            )
            .field(
                "TestEnumField",
                "test_enum_field",
                |r: &Self| &r.test_enum_field,
                |r: &mut Self| &mut r.test_enum_field,
            )
            .field("Ratio", "ratio", |r: &Self| &r.ratio, |r: &mut Self| &mut r.ratio)
            .field(
                "Enabled",
                "enabled",
                |r: &Self| &r.enabled,
                |r: &mut Self| &mut r.enabled,
            )
    }
}

impl TestRecord {
    pub fn sample() -> Self {
        Self {
            test_field: 42,
            test_property: "TestValue".into(),
            test_enum_field: TestEnum::SecondValue,
            ratio: 0.75,
            enabled: true,
            transient: String::new(),
        }
    }
}

/// Element type for numbered-section lists (`[Section1]`, `[Section2]`, ...)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerEntry {
    pub host: String,
    pub port: u16,
}

impl IniSection for ServerEntry {
    fn binding() -> Binding<Self> {
        Binding::new("Section")
            .field("Host", "host", |s: &Self| &s.host, |s: &mut Self| &mut s.host)
            .field("Port", "port", |s: &Self| &s.port, |s: &mut Self| &mut s.port)
    }
}

impl ServerEntry {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

/// A type that never declared a section
#[derive(Debug, Default)]
pub struct Unbound {
    pub value: i32,
}

impl IniSection for Unbound {
    fn binding() -> Binding<Self> {
        Binding::unbound().field("Value", "value", |u: &Self| &u.value, |u: &mut Self| &mut u.value)
    }
}

// =============================================================================
// Test Fixtures
// =============================================================================

/// Temporary directory plus an engine pointed at `settings.ini` inside it
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub settings: IniSettings,
}

impl TestFixture {
    /// Fresh engine over an empty file
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let settings = IniSettings::create(config_for(temp_dir.path()))
            .expect("Failed to create settings");
        Self { temp_dir, settings }
    }

    /// Engine over a file that already holds `content`
    pub fn with_content(content: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("settings.ini"), content).expect("Failed to seed file");
        let settings = IniSettings::create(config_for(temp_dir.path()))
            .expect("Failed to create settings");
        Self { temp_dir, settings }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.temp_dir.path().join("settings.ini")
    }

    pub fn backup_path(&self) -> PathBuf {
        self.temp_dir.path().join("settings.ini.bak")
    }

    pub fn file_content(&self) -> String {
        fs::read_to_string(self.settings_path()).unwrap_or_default()
    }

    pub fn backup_content(&self) -> Option<String> {
        fs::read_to_string(self.backup_path()).ok()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// `settings.ini` in `dir`, written with `\n` so assertions are platform-independent
pub fn config_for(dir: &Path) -> IniSettingsConfig {
    IniSettingsConfig::builder("test-app")
        .config_dir(dir)
        .line_ending(LineEnding::Lf)
        .build()
}

pub fn set_read_only(path: &Path, read_only: bool) {
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_readonly(read_only);
    fs::set_permissions(path, perms).unwrap();
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
