use super::*;
use crate::error::Error;
use serial_test::serial;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_default_config() {
    let config = SilhouetteConfig::default();
    assert_eq!(config.grid_size, 4096);
    assert!(!config.debug_enabled);
    assert_eq!(config.half_grid(), 2048);
    assert_eq!(config.max_coord(), 4095);
    assert_eq!(config, SilhouetteConfig::new());
}

#[test]
fn test_builder_methods() {
    let config = SilhouetteConfig::new().with_grid_size(1024).with_debug(true);
    assert_eq!(config.grid_size, 1024);
    assert!(config.debug_enabled);
    assert_eq!(config.half_grid(), 512);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
#[serial]
fn test_validate_accepts_limits() {
    assert!(SilhouetteConfig::new().with_grid_size(2).validate().is_ok());
    assert!(SilhouetteConfig::new().with_grid_size(MAX_GRID_SIZE).validate().is_ok());
    assert!(SilhouetteConfig::default().validate().is_ok());
}

#[test]
#[serial]
fn test_validate_rejects_odd_grid() {
    let result = SilhouetteConfig::new().with_grid_size(4095).validate();
    assert!(matches!(result, Err(Error::InvalidConfig(msg)) if msg.contains("even")));
}

#[test]
#[serial]
fn test_validate_rejects_out_of_range_grid() {
    assert!(matches!(
        SilhouetteConfig::new().with_grid_size(0).validate(),
        Err(Error::InvalidConfig(_))
    ));
    assert!(matches!(
        SilhouetteConfig::new().with_grid_size(MAX_GRID_SIZE + 2).validate(),
        Err(Error::InvalidConfig(_))
    ));
}
