pub mod fixtures;
pub mod package_root;

#[allow(unused_imports)]
pub use package_root::PackageRootGuard;
