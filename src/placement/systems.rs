use std::collections::HashSet;

use bevy::log::{debug, warn};
use bevy::prelude::*;

use crate::error::PlacementError;
use crate::spline::{Curve, Spline, SplineCurve};

use super::{
    count_along_curve, tile_spans, transforms_along_curve, MeshBounds, PlacementTransforms,
    SplinePlacement, SplineTiling, TileLength, TileSpans,
};

/// Recompute placements whose component or spline changed.
pub fn update_spline_placements(
    mut commands: Commands,
    placements: Query<(Entity, Ref<SplinePlacement>, Option<&PlacementTransforms>)>,
    splines: Query<&Spline>,
    changed_splines: Query<Entity, Changed<Spline>>,
) {
    let changed_spline_set: HashSet<Entity> = changed_splines.iter().collect();

    for (entity, placement, current) in &placements {
        let needs_update = current.is_none()
            || placement.is_changed()
            || changed_spline_set.contains(&placement.spline);
        if !needs_update {
            continue;
        }

        let Some(curve) = splines.get(placement.spline).ok().and_then(SplineCurve::new) else {
            debug!("placement {entity} has no valid spline");
            commands.entity(entity).insert(PlacementTransforms::default());
            continue;
        };

        let transforms = transforms_along_curve(&curve, placement.spacing, placement.facing_up)
            .unwrap_or_else(|err| {
                warn!("placement {entity} rejected: {err}");
                Vec::new()
            });
        commands.entity(entity).insert(PlacementTransforms(transforms));
    }
}

/// Recompute tilings whose component, spline or tile mesh changed.
///
/// Mesh-sized tiles have no [`TileSpans`] until their mesh asset is
/// available, and are retried every frame until then.
pub fn update_spline_tilings(
    mut commands: Commands,
    tilings: Query<(Entity, Ref<SplineTiling>, Option<&TileSpans>)>,
    splines: Query<&Spline>,
    changed_splines: Query<Entity, Changed<Spline>>,
    meshes: Option<Res<Assets<Mesh>>>,
    mut mesh_events: MessageReader<AssetEvent<Mesh>>,
) {
    let changed_spline_set: HashSet<Entity> = changed_splines.iter().collect();
    let changed_mesh_set: HashSet<AssetId<Mesh>> = mesh_events
        .read()
        .filter_map(|event| match event {
            AssetEvent::Added { id }
            | AssetEvent::Modified { id }
            | AssetEvent::LoadedWithDependencies { id } => Some(*id),
            _ => None,
        })
        .collect();

    for (entity, tiling, current) in &tilings {
        let mesh_changed = matches!(
            &tiling.tile_length,
            TileLength::Mesh { mesh, .. } if changed_mesh_set.contains(&mesh.id())
        );
        let needs_update = current.is_none()
            || tiling.is_changed()
            || mesh_changed
            || changed_spline_set.contains(&tiling.spline);
        if !needs_update {
            continue;
        }

        let Some(curve) = splines.get(tiling.spline).ok().and_then(SplineCurve::new) else {
            debug!("tiling {entity} has no valid spline");
            commands.entity(entity).insert(TileSpans::default());
            continue;
        };

        let plan = match &tiling.tile_length {
            TileLength::Fixed(bound) if *bound > 0.0 && bound.is_finite() => {
                Ok((*bound, (curve.length() / *bound).floor() as usize))
            }
            TileLength::Fixed(bound) => Err(PlacementError::InvalidTileLength(*bound)),
            TileLength::Mesh { mesh, axis } => {
                let Some(bounds) = meshes
                    .as_ref()
                    .and_then(|meshes| meshes.get(mesh))
                    .and_then(MeshBounds::from_mesh)
                else {
                    // Spans for the previous tile length are stale.
                    if current.is_some() {
                        commands.entity(entity).remove::<TileSpans>();
                    }
                    continue;
                };
                count_along_curve(&curve, Some(&bounds), *axis)
                    .map(|count| (bounds.extent(*axis), count))
            }
        };

        let spans = plan
            .and_then(|(bound, count)| tile_spans(&curve, bound, count, tiling.start_offset))
            .unwrap_or_else(|err: PlacementError| {
                warn!("tiling {entity} rejected: {err}");
                Vec::new()
            });
        commands.entity(entity).insert(TileSpans(spans));
    }
}
