//! Debug outline of the pan envelope for hosts that draw gizmos.

use glam::Vec3;

use super::constraints::PanEnvelope;

/// Height above ground at which the outline edges are drawn, so they do
/// not z-fight with the floor.
const EDGE_LIFT: f32 = 0.1;

/// What a gizmo line represents, so hosts can colour it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GizmoKind {
    /// Rectangle edge at ground level.
    Edge,
    /// Vertical post at an envelope corner.
    Post,
}

/// One line segment of the envelope outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoLine {
    /// Segment start.
    pub start: Vec3,
    /// Segment end.
    pub end: Vec3,
    /// Edge or post.
    pub kind: GizmoKind,
}

/// Edges and corner posts outlining `envelope`.
///
/// Yields the four rectangle edges first, then one post of `post_height`
/// per corner.
#[must_use]
pub fn envelope_outline(
    envelope: &PanEnvelope,
    post_height: f32,
) -> Vec<GizmoLine> {
    let corners = envelope.corners();
    let lift = Vec3::Y * EDGE_LIFT;

    let edges = (0..corners.len()).map(|i| GizmoLine {
        start: corners[i] + lift,
        end: corners[(i + 1) % corners.len()] + lift,
        kind: GizmoKind::Edge,
    });
    let posts = corners.iter().map(|&corner| GizmoLine {
        start: corner,
        end: corner + Vec3::Y * post_height,
        kind: GizmoKind::Post,
    });

    edges.chain(posts).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_closes_the_rectangle() {
        let envelope = PanEnvelope::default();
        let lines = envelope_outline(&envelope, 10.0);
        assert_eq!(lines.len(), 8);

        let edges: Vec<_> =
            lines.iter().filter(|l| l.kind == GizmoKind::Edge).collect();
        assert_eq!(edges.len(), 4);
        for pair in edges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(edges[3].end, edges[0].start);
    }

    #[test]
    fn posts_rise_from_the_corners() {
        let envelope = PanEnvelope::default();
        let lines = envelope_outline(&envelope, 10.0);
        for (post, corner) in lines
            .iter()
            .filter(|l| l.kind == GizmoKind::Post)
            .zip(envelope.corners())
        {
            assert_eq!(post.start, corner);
            assert_eq!(post.end.y - post.start.y, 10.0);
        }
    }
}
