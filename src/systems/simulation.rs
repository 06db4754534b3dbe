//! Headless simulation system
//!
//! Manages the fixed-step loop:
//! - World construction from configuration
//! - Constant spin and physics stepping
//! - Reduction of every entity to 3D geometry
//! - Periodic statistics logging

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use polychora_core::{
    generate, terrain_ring, Entity, EntityKey, FlatHeight, GeometryError, RigidBody4D,
    RotationState, ShapeKind, Skeleton4D, TerrainChunk, TickStats, Transform4D, Vec4, World,
};
use polychora_slice::{ReducedGeometry, Reducer};

use crate::config::AppConfig;
use crate::error::AppError;

/// Geometry and physics counts of one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Tick number, starting at 1
    pub tick: u64,
    /// Physics counts from the world tick
    pub physics: TickStats,
    /// Triangles or segments produced across all entities
    pub primitives: usize,
    /// Entities that produced something to display
    pub visible: usize,
    /// Entities that produced nothing
    pub hidden: usize,
}

/// Totals over a whole run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    /// Most primitives seen in a single tick
    pub peak_primitives: usize,
    /// Ticks in which no entity produced geometry
    pub empty_ticks: u64,
    /// Bodies resting on the floor after the last tick
    pub resting: usize,
}

/// Owns the world, the reducer and the RNG of one run
pub struct SimulationSystem {
    world: World,
    reducer: Reducer,
    rng: StdRng,
    fixed_dt: f32,
    spin: RotationState,
    spinning: Vec<EntityKey>,
    report_every: u32,
    tick: u64,
}

impl SimulationSystem {
    /// Build the world described by `config`
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let kind = config.shape.shape_kind()?;
        let mut rng = match config.simulation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut world = World::new();
        let mut spinning = Vec::new();

        if kind == ShapeKind::Terrain {
            let heights = FlatHeight(config.shape.terrain_height);
            let origins = terrain_ring(config.shape.terrain_ring.max(1));
            for (i, origin) in origins.iter().enumerate() {
                let chunk = TerrainChunk::new(*origin, &heights);
                let position = Vec4::new(origin[0], 0.0, origin[1], 0.0);
                world.add_entity(
                    Entity::from_shape(chunk)
                        .with_name(format!("terrain_{}", i))
                        .with_transform(Transform4D::from_position(position)),
                );
            }
            log::info!("Built terrain ring of {} chunks", origins.len());
        } else {
            let polytope = generate(kind)?;
            log::info!(
                "Built {}: {} vertices, {} edges",
                kind,
                polytope.vertex_count(),
                polytope.edge_count()
            );

            let mut entity = Entity::new(Arc::new(polytope))
                .with_name(kind.name())
                .with_transform(config.transform.to_transform());
            if config.simulation.physics {
                let mut body = RigidBody4D::new(config.physics.clone());
                if config.simulation.flick {
                    body.flick_random(&mut rng);
                }
                entity = entity.with_body(body);
            }
            spinning.push(world.add_entity(entity));
        }

        let reducer = Reducer::new(config.projection.mode)
            .with_slicer(config.projection.slicer())
            .with_projector(config.projection.projector());

        Ok(Self {
            world,
            reducer,
            rng,
            fixed_dt: config.simulation.fixed_dt,
            spin: RotationState::from_array(config.simulation.spin),
            spinning,
            report_every: config.debug.report_every,
            tick: 0,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn reducer(&self) -> &Reducer {
        &self.reducer
    }

    /// Ticks run so far
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Run one fixed tick
    ///
    /// Order: spin, physics, vertex refresh, reduction.
    pub fn step(&mut self) -> Result<FrameStats, GeometryError> {
        self.tick += 1;

        if self.spin.abs_sum() > 0.0 {
            for key in &self.spinning {
                if let Some(entity) = self.world.get_entity_mut(*key) {
                    let rotation = entity.transform.rotation_mut();
                    rotation.add_scaled(&self.spin, 1.0);
                    *rotation = rotation.wrapped();
                }
            }
        }

        let physics = self.world.tick(self.fixed_dt, &mut self.rng);

        let mut frame = FrameStats {
            tick: self.tick,
            physics,
            ..FrameStats::default()
        };
        for (_, entity) in self.world.iter() {
            match self.reducer.reduce_entity(entity)? {
                ReducedGeometry::Nothing => frame.hidden += 1,
                geometry => {
                    frame.visible += 1;
                    frame.primitives += geometry.primitive_count();
                }
            }
        }

        log::trace!(
            "tick {}: {} primitives, {} visible, {} hidden",
            frame.tick,
            frame.primitives,
            frame.visible,
            frame.hidden
        );
        if self.report_every > 0 && self.tick % u64::from(self.report_every) == 0 {
            log::debug!(
                "tick {}: {} primitives from {} entities ({} bounced, {} resting)",
                frame.tick,
                frame.primitives,
                frame.visible,
                frame.physics.bounced,
                frame.physics.resting
            );
        }

        Ok(frame)
    }

    /// Run `ticks` fixed ticks
    pub fn run(&mut self, ticks: u32) -> Result<RunSummary, GeometryError> {
        let mut summary = RunSummary::default();
        for _ in 0..ticks {
            let frame = self.step()?;
            summary.ticks += 1;
            summary.peak_primitives = summary.peak_primitives.max(frame.primitives);
            if frame.visible == 0 {
                summary.empty_ticks += 1;
            }
            summary.resting = frame.physics.resting;
        }

        log::info!(
            "Ran {} ticks: peak {} primitives, {} empty ticks, {} bodies resting",
            summary.ticks,
            summary.peak_primitives,
            summary.empty_ticks,
            summary.resting
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polychora_slice::ProjectionMode;

    fn seeded_config(kind: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.shape.kind = kind.to_string();
        config.simulation.seed = Some(7);
        config
    }

    #[test]
    fn test_builds_single_polytope() {
        let sim = SimulationSystem::from_config(&seeded_config("hypercube")).unwrap();
        assert_eq!(sim.world().entity_count(), 1);
        let (_, entity) = sim.world().get_by_name("hypercube").unwrap();
        assert_eq!(entity.world_vertices().len(), 16);
        assert!(entity.body.is_some());
    }

    #[test]
    fn test_unknown_shape_fails() {
        let result = SimulationSystem::from_config(&seeded_config("klein-bottle"));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_terrain_builds_ring() {
        let mut config = seeded_config("terrain");
        config.shape.terrain_ring = 3;
        let sim = SimulationSystem::from_config(&config).unwrap();
        assert_eq!(sim.world().entity_count(), 8);
        assert!(sim.world().iter().all(|(_, e)| e.body.is_none()));
    }

    #[test]
    fn test_static_hypercube_slices_every_tick() {
        let mut config = seeded_config("hypercube");
        config.transform.position = [0.0; 4];
        config.simulation.physics = false;
        config.simulation.spin = [0.0; 6];

        let mut sim = SimulationSystem::from_config(&config).unwrap();
        let summary = sim.run(5).unwrap();
        assert_eq!(summary.ticks, 5);
        assert_eq!(summary.peak_primitives, 12);
        assert_eq!(summary.empty_ticks, 0);
        assert_eq!(sim.tick_count(), 5);
    }

    #[test]
    fn test_spin_accumulates_and_wraps() {
        let mut config = seeded_config("cell16");
        config.simulation.physics = false;
        config.simulation.spin = [0.0, 0.0, 0.0, 0.0, 100.0, 0.0];

        let mut sim = SimulationSystem::from_config(&config).unwrap();
        sim.run(2).unwrap();
        let (_, entity) = sim.world().get_by_name("cell16").unwrap();
        // 200 degrees wraps to -160
        assert!((entity.transform.rotation().yw + 160.0).abs() < 1e-3);
    }

    #[test]
    fn test_same_seed_same_run() {
        let config = seeded_config("cell24");
        let mut a = SimulationSystem::from_config(&config).unwrap();
        let mut b = SimulationSystem::from_config(&config).unwrap();
        for _ in 0..50 {
            assert_eq!(a.step().unwrap(), b.step().unwrap());
        }
    }

    #[test]
    fn test_orthographic_counts_segments() {
        let mut config = seeded_config("cell16");
        config.projection.mode = ProjectionMode::Orthographic;
        config.simulation.physics = false;

        let mut sim = SimulationSystem::from_config(&config).unwrap();
        let frame = sim.step().unwrap();
        assert_eq!(frame.primitives, 24);
        assert_eq!(frame.visible, 1);
    }

    #[test]
    fn test_falling_body_comes_to_rest() {
        let mut config = seeded_config("hypercube");
        config.simulation.flick = false;
        config.simulation.spin = [0.0; 6];

        let mut sim = SimulationSystem::from_config(&config).unwrap();
        let summary = sim.run(2000).unwrap();
        assert_eq!(summary.resting, 1);
    }
}
