//! 2D Verlet points, lines and contacts.
//!
//! `verlet-world` simulates ropes and loose point sets as position-based
//! dynamics: each point remembers its previous position, lines are relaxed
//! towards their rest length, and points are pushed back out of the ground
//! and out of circular obstacles.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity, fixed per-step gravity
//! - **Line constraints**: rest length fixed at creation, relaxed
//!   Gauss-Seidel style, optionally spanning bodies
//! - **Contacts**: ground plane with per-body bounce/friction, elastic
//!   frictionless circles
//! - **Authoring**: `RopeBuilder` for drawing ropes stroke by stroke
//! - **Observable**: monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use verlet_world::{Body, Material, Vec2, World, WorldConfig};
//!
//! let mut world: World<f32> = World::new(
//!     WorldConfig::new().with_gravity(Vec2::new(0.0, 1.0)).with_bottom(100.0),
//! );
//! let body = world.add_body(Body::with_material(
//!     Material::new().with_bounce(0.0).with_friction(1.0),
//! ));
//! let p = world.add_point(body, Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0)).unwrap();
//! for _ in 0..100 {
//!     world.update();
//! }
//! assert_eq!(world.point(p).unwrap().position.y, 100.0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod line;
pub mod body;
pub mod circle;
pub mod contact;
pub mod world;
pub mod authoring;
pub mod preset;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point::Point;
pub use line::LineConstraint;
pub use body::{Body, BodyId, Material, PointId};
pub use circle::Circle;
pub use world::World;
pub use authoring::RopeBuilder;
pub use config::WorldConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
