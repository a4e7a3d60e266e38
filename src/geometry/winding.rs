//! Polygon face winding definitions

/// Defines face winding variations. These apply to screen-space vertices with
/// y growing downward, so imagine the vertices as they are viewed on the final image.
///
/// Winding is read from the sign of the triangle's area, see [`Triangle::winding`](../triangle/struct.Triangle.html#method.winding):
/// negative is clockwise, positive is counter-clockwise.
///
/// Clockwise is the native orientation of the rasterizer. Every edge function of a
/// clockwise triangle is negative inside it, which is the orientation the top-left
/// fill rule is defined for. Counter-clockwise triangles are rasterized as their reversal.
///
/// If all triangles of a mesh have the same face winding,
/// then triangles that are facing away from the screen can be skipped since they
/// will have the opposite winding order, since they are viewed from the back. This is known
/// as backface culling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceWinding {
    /// Clockwise face winding, where the vertices are like so:
    ///
    /// ```text
    ///            1
    ///           / \
    ///          /   \   |
    ///         /     \  V
    ///        /       \
    ///       3 ------- 2
    ///          <----
    /// ```
    Clockwise,
    /// Counter-Clockwise face winding, where the vertices are like so:
    ///
    /// ```text
    ///            1
    ///           / \
    ///      |   /   \
    ///      V  /     \
    ///        /       \
    ///       2 ------- 3
    ///          ---->
    /// ```
    CounterClockwise,
}
