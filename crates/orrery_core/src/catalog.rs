//! The fixed body table
//!
//! Entries are listed in creation order: background, Sun, then the planets
//! outward, with the Moon right after the Earth it orbits.

use std::path::Path;

use rand::Rng;

use crate::body::BodyParams;
use crate::error::AssetLoadError;
use crate::presentation::AssetLoader;
use crate::registry::{BodyRegistry, RegistryError};

/// Background music, relative to the asset root
pub const MUSIC_FILE: &str = "music/CornfieldChase.wav";

/// Directory holding the body images, relative to the asset root
pub const IMAGE_DIR: &str = "image";

/// Static description of one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub name: &'static str,
    /// Image file name inside [`IMAGE_DIR`]
    pub file: &'static str,
    pub size_scale: f64,
    pub orbit_radius_scale: f64,
    pub angle_increment: f64,
    /// Name of the body this one orbits
    pub primary: Option<&'static str>,
}

const fn spec(
    name: &'static str,
    file: &'static str,
    size_scale: f64,
    orbit_radius_scale: f64,
    angle_increment: f64,
) -> BodySpec {
    BodySpec {
        name,
        file,
        size_scale,
        orbit_radius_scale,
        angle_increment,
        primary: None,
    }
}

pub const CATALOG: [BodySpec; 11] = [
    spec("Cosmos", "Cosmos.jpg", 0.0, 0.0, 0.0),
    spec("Sun", "Sun.png", 0.15625, 0.0, 0.0),
    spec("Mercury", "Mercury.png", 0.006, 0.0625, 4.0),
    spec("Venus", "Venus.png", 0.012, 0.086, 1.5),
    spec("Earth", "Earth.png", 0.015, 0.125, 1.0),
    BodySpec {
        primary: Some("Earth"),
        ..spec("Moon", "Moon.png", 0.005, 0.025, 12.0)
    },
    spec("Mars", "Mars.png", 0.01, 0.2, 0.5),
    spec("Jupiter", "Jupiter.png", 0.06, 0.3, 0.25),
    spec("Saturn", "Saturn.png", 0.05, 0.45, 0.2),
    spec("Uranus", "Uranus.png", 0.045, 0.55, 0.15),
    spec("Neptune", "Neptune.png", 0.045, 0.75, 0.1),
];

/// Error raised while loading the catalog into a registry
#[derive(Debug)]
pub enum CatalogError {
    Asset(AssetLoadError),
    Registry(RegistryError),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Asset(err) => write!(f, "{}", err),
            CatalogError::Registry(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Asset(err) => Some(err),
            CatalogError::Registry(err) => Some(err),
        }
    }
}

impl From<AssetLoadError> for CatalogError {
    fn from(err: AssetLoadError) -> Self {
        CatalogError::Asset(err)
    }
}

impl From<RegistryError> for CatalogError {
    fn from(err: RegistryError) -> Self {
        CatalogError::Registry(err)
    }
}

/// Load every catalog image and register its body
///
/// Stops at the first failure; bodies registered before it stay in the
/// registry so the caller can tear them down.
pub fn load_catalog<L, R>(
    specs: &[BodySpec],
    asset_root: &Path,
    loader: &mut L,
    registry: &mut BodyRegistry,
    rng: &mut R,
) -> Result<(), CatalogError>
where
    L: AssetLoader + ?Sized,
    R: Rng,
{
    let image_dir = asset_root.join(IMAGE_DIR);

    for spec in specs {
        let visual = loader.load_image(&image_dir.join(spec.file))?;

        let mut params = BodyParams::new(spec.size_scale, spec.orbit_radius_scale, spec.angle_increment);
        if let Some(primary_name) = spec.primary {
            let (primary, _) = registry.find_by_name(primary_name).ok_or(RegistryError::UnknownPrimary {
                body: spec.name,
                primary: primary_name,
            })?;
            params = params.orbiting(primary);
        }

        registry.spawn_with_rng(spec.name, visual, params, rng)?;
    }

    log::info!("Loaded {} bodies", registry.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::VisualHandle;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::PathBuf;

    struct FakeLoader {
        loaded: Vec<PathBuf>,
        fail_on: Option<&'static str>,
    }

    impl AssetLoader for FakeLoader {
        fn load_image(&mut self, path: &Path) -> Result<VisualHandle, AssetLoadError> {
            if let Some(bad) = self.fail_on {
                if path.ends_with(bad) {
                    return Err(AssetLoadError::image(path, "unsupported image format"));
                }
            }
            self.loaded.push(path.to_path_buf());
            Ok(VisualHandle::new(self.loaded.len() as u32 - 1))
        }
    }

    #[test]
    fn test_catalog_order_and_moon_primary() {
        let mut loader = FakeLoader { loaded: Vec::new(), fail_on: None };
        let mut registry = BodyRegistry::new();
        let mut rng = StdRng::seed_from_u64(1);

        load_catalog(&CATALOG, Path::new("assets"), &mut loader, &mut registry, &mut rng).unwrap();

        assert_eq!(registry.len(), 11);
        assert_eq!(loader.loaded[0], Path::new("assets/image/Cosmos.jpg"));
        let (earth, _) = registry.find_by_name("Earth").unwrap();
        let (_, moon) = registry.find_by_name("Moon").unwrap();
        assert_eq!(moon.primary(), Some(earth));
        assert_eq!(registry.backgrounds().count(), 1);
    }

    #[test]
    fn test_load_stops_at_first_failure() {
        let mut loader = FakeLoader { loaded: Vec::new(), fail_on: Some("Mars.png") };
        let mut registry = BodyRegistry::new();
        let mut rng = StdRng::seed_from_u64(1);

        let err = load_catalog(&CATALOG, Path::new("."), &mut loader, &mut registry, &mut rng).unwrap_err();

        assert!(matches!(err, CatalogError::Asset(_)));
        assert_eq!(registry.len(), 6);
        assert!(loader.loaded.iter().all(|p| !p.ends_with("Jupiter.png")));
    }

    #[test]
    fn test_unknown_primary_is_reported() {
        let specs = [BodySpec {
            primary: Some("Earth"),
            ..CATALOG[5]
        }];
        let mut loader = FakeLoader { loaded: Vec::new(), fail_on: None };
        let mut registry = BodyRegistry::new();
        let mut rng = StdRng::seed_from_u64(1);

        let err = load_catalog(&specs, Path::new("."), &mut loader, &mut registry, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Registry(RegistryError::UnknownPrimary { body: "Moon", primary: "Earth" })
        ));
    }
}
