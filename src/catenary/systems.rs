use std::collections::HashSet;

use bevy::log::warn;
use bevy::prelude::*;

use super::chain::{sample_wire_chains_parallel, WireChain};
use super::{CatenaryRng, CatenaryWire, WireCurve};

/// Resample wires whose settings or anchors changed.
///
/// All wires that need work are solved together on the compute task pool.
pub fn update_catenary_wires(
    mut commands: Commands,
    mut rng: ResMut<CatenaryRng>,
    wires: Query<(Entity, Ref<CatenaryWire>, Option<&WireCurve>)>,
    anchors: Query<&GlobalTransform>,
    moved_anchors: Query<Entity, Changed<GlobalTransform>>,
) {
    let moved: HashSet<Entity> = moved_anchors.iter().collect();

    let mut pending = Vec::new();
    for (entity, wire, curve) in &wires {
        let needs_update = curve.is_none()
            || wire.is_changed()
            || wire.anchors.iter().any(|anchor| moved.contains(anchor));
        if !needs_update {
            continue;
        }

        let positions: Option<Vec<Vec3>> = wire
            .anchors
            .iter()
            .map(|&anchor| anchors.get(anchor).ok().map(GlobalTransform::translation))
            .collect();
        let Some(positions) = positions else {
            warn!("catenary wire {entity} references an anchor without a transform");
            commands.entity(entity).insert(WireCurve::default());
            continue;
        };

        pending.push((entity, wire.settings, positions, wire.closed));
    }

    // Wires are grouped by settings so each batch shares one parameter set.
    while let Some(&(_, settings, _, _)) = pending.first() {
        let (batch, rest): (Vec<_>, Vec<_>) = pending
            .into_iter()
            .partition(|(_, other, _, _)| *other == settings);
        pending = rest;

        let chains: Vec<WireChain> = batch
            .iter()
            .map(|(_, _, anchors, closed)| WireChain {
                anchors: anchors.clone(),
                closed: *closed,
            })
            .collect();
        let results =
            sample_wire_chains_parallel(&chains, &settings.params(), settings.solver, &mut rng.0);

        for ((entity, ..), result) in batch.into_iter().zip(results) {
            let points = result.unwrap_or_else(|err| {
                warn!("catenary wire {entity} could not be sampled: {err}");
                Vec::new()
            });
            commands.entity(entity).insert(WireCurve { points });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catenary::{CatenaryPlugin, CatenarySettings, CatenarySolver};

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins(CatenaryPlugin)
            .insert_resource(CatenaryRng::seeded(3));
        app
    }

    #[test]
    fn test_wire_curve_is_written() {
        let mut app = app();
        let a = app
            .world_mut()
            .spawn(GlobalTransform::from_translation(Vec3::new(0.0, 100.0, 0.0)))
            .id();
        let b = app
            .world_mut()
            .spawn(GlobalTransform::from_translation(Vec3::new(400.0, 100.0, 0.0)))
            .id();
        let settings = CatenarySettings::default()
            .with_resolution(12)
            .with_solver(CatenarySolver::Fixed);
        let wire = app
            .world_mut()
            .spawn(CatenaryWire::new(vec![a, b]).with_settings(settings))
            .id();

        app.update();

        let curve = app.world().get::<WireCurve>(wire).unwrap();
        assert_eq!(curve.points.len(), 12);
        assert_eq!(curve.points[0].x, 0.0);
        assert_eq!(curve.points[11].x, 400.0);
    }

    #[test]
    fn test_missing_anchor_clears_curve() {
        let mut app = app();
        let a = app.world_mut().spawn(GlobalTransform::IDENTITY).id();
        let missing = app.world_mut().spawn_empty().id();
        let wire = app
            .world_mut()
            .spawn(CatenaryWire::new(vec![a, missing]))
            .id();

        app.update();

        assert!(app.world().get::<WireCurve>(wire).unwrap().points.is_empty());
    }
}
