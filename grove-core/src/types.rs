/// Identifier for a node in a [`crate::scene::Scene`].
///
/// This is an index into `Scene::nodes`, and is only meaningful within
/// the lifetime of a given node set: every regeneration (resize or
/// layout switch) invalidates all previously observed ids.
pub type NodeId = usize;
