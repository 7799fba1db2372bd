//! Finds where a subscene attaches inside a scene template.

use glam::Vec3;
use scenegraft_assets::AssetLookup;
use scenegraft_common::SnoId;
use tracing::warn;

/// First marker of `kind` across the scene's marker sets, in authored order.
///
/// Returns the marker's position relative to the scene. Missing scene
/// templates or marker sets are logged and treated as having no markers.
pub fn find_anchor<A>(assets: &A, scene: SnoId, kind: i32) -> Option<Vec3>
where
    A: AssetLookup + ?Sized,
{
    let Some(template) = assets.scene(scene) else {
        warn!(scene = %scene, "scene template not found while searching for anchor");
        return None;
    };

    template.marker_sets.iter().find_map(|set_id| {
        let Some(set) = assets.marker_set(*set_id) else {
            warn!(scene = %scene, marker_set = %set_id, "marker set not found");
            return None;
        };
        set.markers
            .iter()
            .find(|m| m.kind == kind)
            .map(|m| m.position)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenegraft_assets::{
        AssetStore, Marker, MarkerSetTemplate, SUBSCENE_ANCHOR_KIND, SceneTemplate,
    };

    fn marker(kind: i32, x: f32) -> Marker {
        Marker {
            kind,
            position: Vec3::new(x, 0.0, 0.0),
        }
    }

    fn store_with(marker_sets: Vec<(i32, Vec<Marker>)>) -> AssetStore {
        let mut store = AssetStore::new();
        store.insert_scene(
            SnoId(1),
            SceneTemplate {
                marker_sets: marker_sets.iter().map(|(id, _)| SnoId(*id)).collect(),
                ..SceneTemplate::default()
            },
        );
        for (id, markers) in marker_sets {
            store.insert_marker_set(SnoId(id), MarkerSetTemplate { markers });
        }
        store
    }

    #[test]
    fn first_match_in_first_set() {
        let store = store_with(vec![
            (
                10,
                vec![
                    marker(0, 1.0),
                    marker(SUBSCENE_ANCHOR_KIND, 2.0),
                    marker(SUBSCENE_ANCHOR_KIND, 3.0),
                ],
            ),
            (11, vec![marker(SUBSCENE_ANCHOR_KIND, 4.0)]),
        ]);
        let pos = find_anchor(&store, SnoId(1), SUBSCENE_ANCHOR_KIND).unwrap();
        assert_eq!(pos.x, 2.0);
    }

    #[test]
    fn later_set_is_searched() {
        let store = store_with(vec![
            (10, vec![marker(0, 1.0)]),
            (11, vec![marker(SUBSCENE_ANCHOR_KIND, 4.0)]),
        ]);
        let pos = find_anchor(&store, SnoId(1), SUBSCENE_ANCHOR_KIND).unwrap();
        assert_eq!(pos.x, 4.0);
    }

    #[test]
    fn no_anchor_kind_is_none() {
        let store = store_with(vec![(10, vec![marker(0, 1.0), marker(3, 2.0)])]);
        assert!(find_anchor(&store, SnoId(1), SUBSCENE_ANCHOR_KIND).is_none());
    }

    #[test]
    fn missing_marker_set_is_skipped() {
        let mut store = store_with(vec![(11, vec![marker(SUBSCENE_ANCHOR_KIND, 5.0)])]);
        store.insert_scene(
            SnoId(1),
            SceneTemplate {
                marker_sets: vec![SnoId(404), SnoId(11)],
                ..SceneTemplate::default()
            },
        );
        let pos = find_anchor(&store, SnoId(1), SUBSCENE_ANCHOR_KIND).unwrap();
        assert_eq!(pos.x, 5.0);
    }

    #[test]
    fn missing_scene_is_none() {
        let store = AssetStore::new();
        assert!(find_anchor(&store, SnoId(1), SUBSCENE_ANCHOR_KIND).is_none());
    }

    #[test]
    fn custom_kind() {
        let store = store_with(vec![(10, vec![marker(16, 1.0), marker(42, 9.0)])]);
        assert_eq!(find_anchor(&store, SnoId(1), 42).unwrap().x, 9.0);
    }
}
