use std::collections::BTreeMap;

use serde::Serialize;

use crate::scene::primitive::{Family, Primitive, PrimitiveId, Shape};

/// Create/update/destroy counts of one reconciliation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Primitives appended for indices beyond the previous data length.
    pub created: usize,
    /// Surviving primitives whose attributes were recomputed.
    pub updated: usize,
    /// Primitives removed for indices beyond the new data length.
    pub destroyed: usize,
}

impl std::ops::AddAssign for ReconcileStats {
    fn add_assign(&mut self, rhs: Self) {
        self.created += rhs.created;
        self.updated += rhs.updated;
        self.destroyed += rhs.destroyed;
    }
}

/// Change a host applies to its rendering surface.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SceneOp {
    /// New primitive.
    Create {
        /// Identifier of the new primitive.
        id: PrimitiveId,
        /// Its initial state.
        primitive: Primitive,
    },
    /// Attributes of an existing primitive changed.
    Update {
        /// Identifier of the changed primitive.
        id: PrimitiveId,
        /// Its new state.
        primitive: Primitive,
    },
    /// Primitive removed.
    Destroy {
        /// Identifier of the removed primitive.
        id: PrimitiveId,
    },
    /// Primitive moved to another family and restyled (preview becoming final).
    Promote {
        /// Old identifier.
        from: PrimitiveId,
        /// New identifier.
        to: PrimitiveId,
    },
}

/// Retained set of named primitives, kept in sync with data by positional reconciliation.
///
/// Binding is by index, never by value: element `i` of a family always renders element `i` of its
/// data array. Families with no data hold no primitives.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    families: BTreeMap<Family, Vec<Primitive>>,
    ops: Vec<SceneOp>,
}

impl SceneRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `shapes` to `family` by position.
    ///
    /// Surviving indices get their attributes recomputed (an op is recorded only when the geometry
    /// actually changed), indices past the previous length are created with the family's default
    /// role, and indices past the new length are destroyed. Reconciling the same data twice is a
    /// no-op apart from the `updated` count.
    pub fn reconcile(&mut self, family: Family, shapes: Vec<Shape>) -> ReconcileStats {
        let mut stats = ReconcileStats::default();
        let slot = self.families.entry(family).or_default();

        let new_len = shapes.len();
        for index in (new_len..slot.len()).rev() {
            self.ops.push(SceneOp::Destroy {
                id: PrimitiveId { family, index },
            });
            stats.destroyed += 1;
        }
        slot.truncate(new_len);

        for (index, shape) in shapes.into_iter().enumerate() {
            let id = PrimitiveId { family, index };
            match slot.get_mut(index) {
                Some(existing) => {
                    stats.updated += 1;
                    if existing.shape != shape {
                        existing.shape = shape;
                        self.ops.push(SceneOp::Update {
                            id,
                            primitive: existing.clone(),
                        });
                    }
                }
                None => {
                    let primitive = Primitive {
                        role: family.default_role(),
                        shape,
                    };
                    self.ops.push(SceneOp::Create {
                        id,
                        primitive: primitive.clone(),
                    });
                    slot.push(primitive);
                    stats.created += 1;
                }
            }
        }

        if slot.is_empty() {
            self.families.remove(&family);
        }
        if stats.created + stats.destroyed > 0 {
            tracing::debug!(%family, ?stats, "reconciled");
        }
        stats
    }

    /// Remove every primitive of `family`; returns how many were destroyed.
    pub fn teardown(&mut self, family: Family) -> usize {
        self.reconcile(family, Vec::new()).destroyed
    }

    /// Move every primitive of `from` to the end of `to`, restyled with `to`'s default role.
    ///
    /// Returns the number of promoted primitives.
    pub fn promote(&mut self, from: Family, to: Family) -> usize {
        let Some(moved) = self.families.remove(&from) else {
            return 0;
        };
        let n = moved.len();
        let target = self.families.entry(to).or_default();
        for (old_index, mut primitive) in moved.into_iter().enumerate() {
            primitive.role = to.default_role();
            self.ops.push(SceneOp::Promote {
                from: PrimitiveId {
                    family: from,
                    index: old_index,
                },
                to: PrimitiveId {
                    family: to,
                    index: target.len(),
                },
            });
            target.push(primitive);
        }
        n
    }

    /// Primitives of `family` in index order.
    pub fn family(&self, family: Family) -> &[Primitive] {
        self.families.get(&family).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of primitives in `family`.
    pub fn len(&self, family: Family) -> usize {
        self.family(family).len()
    }

    /// Total number of primitives.
    pub fn total(&self) -> usize {
        self.families.values().map(Vec::len).sum()
    }

    /// Return `true` when no primitive exists.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Non-empty families.
    pub fn families(&self) -> impl Iterator<Item = (Family, &[Primitive])> {
        self.families.iter().map(|(f, p)| (*f, p.as_slice()))
    }

    /// Take the ops recorded since the last drain.
    pub fn drain_ops(&mut self) -> Vec<SceneOp> {
        std::mem::take(&mut self.ops)
    }

    /// Family key to primitives map, for serialization.
    pub fn snapshot(&self) -> BTreeMap<&'static str, Vec<Primitive>> {
        self.families
            .iter()
            .map(|(f, p)| (f.key(), p.clone()))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/registry.rs"]
mod tests;
