use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use super::model::{NamedVector, TargetVectorSpec};

/// Wire shape chosen for a set of query vectors.
///
/// At most one of `per_target` / `flat` is populated. Both are `None` when no
/// vectors were supplied; `targets` may still be set in that case.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedVectorEncoding {
    pub targets: Option<TargetVectorSpec>,
    pub per_target: Option<BTreeMap<String, Vec<NamedVector>>>,
    pub flat: Option<Vec<NamedVector>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorShape {
    Empty,
    Flat,
    PerTarget,
}

impl ResolvedVectorEncoding {
    pub fn shape(&self) -> VectorShape {
        match (&self.per_target, &self.flat) {
            (Some(_), _) => VectorShape::PerTarget,
            (None, Some(_)) => VectorShape::Flat,
            (None, None) => VectorShape::Empty,
        }
    }

    fn flat(targets: TargetVectorSpec, vectors: Vec<NamedVector>) -> Self {
        Self {
            targets: Some(targets),
            per_target: None,
            flat: Some(vectors),
        }
    }
}

/// Decides how `vectors` are laid out on the wire for the given target spec.
///
/// Without a spec, the distinct non-empty vector names (sorted) become the
/// targets; a lone unnamed vector targets `""`. Duplicate names in
/// `spec.targets` are not handled here, see [`TargetVectorSpec::validate`].
pub fn resolve(
    spec: Option<TargetVectorSpec>,
    vectors: Vec<NamedVector>,
) -> ResolvedVectorEncoding {
    let spec = match spec {
        Some(spec) => spec,
        None if vectors.is_empty() => return ResolvedVectorEncoding::default(),
        None => synthesize_spec(&vectors),
    };

    if vectors.is_empty() {
        return ResolvedVectorEncoding {
            targets: Some(spec),
            ..Default::default()
        };
    }

    if spec.targets.len() == 1 && vectors.len() == 1 {
        debug!(target_vector = %spec.targets[0], "Single target vector, flat shape");
        return ResolvedVectorEncoding::flat(spec, vectors);
    }

    let counts = count_by_name(&vectors);
    if !use_per_target(&spec, &counts) {
        debug!(vectors = vectors.len(), "Using flat vector shape");
        return ResolvedVectorEncoding::flat(spec, vectors);
    }

    let mut groups: BTreeMap<String, Vec<NamedVector>> = BTreeMap::new();
    for vector in vectors {
        groups.entry(vector.name.clone()).or_default().push(vector);
    }

    debug!(targets = groups.len(), "Using per-target vector shape");
    ResolvedVectorEncoding {
        targets: Some(spec),
        per_target: Some(groups),
        flat: None,
    }
}

fn synthesize_spec(vectors: &[NamedVector]) -> TargetVectorSpec {
    let names: BTreeSet<&str> = vectors
        .iter()
        .filter(|v| !v.is_unnamed())
        .map(|v| v.name.as_str())
        .collect();

    if names.is_empty() {
        TargetVectorSpec::new([""])
    } else {
        TargetVectorSpec::new(names)
    }
}

fn count_by_name(vectors: &[NamedVector]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for vector in vectors {
        *counts.entry(vector.name.as_str()).or_insert(0) += 1;
    }
    counts
}

fn weights_match(spec: &TargetVectorSpec, counts: &BTreeMap<&str, usize>) -> bool {
    let pairs = spec.weight_pairs();
    counts.iter().all(|(name, &count)| {
        pairs.iter().filter(|(target, _)| target == name).count() == count
    })
}

fn use_per_target(spec: &TargetVectorSpec, counts: &BTreeMap<&str, usize>) -> bool {
    let targets: BTreeSet<&str> = spec.targets.iter().map(String::as_str).collect();
    let names: BTreeSet<&str> = counts.keys().copied().collect();

    let bijective = targets.len() > 1
        && targets == names
        && (!spec.has_weights() || weights_match(spec, counts));
    let stacked = counts.values().any(|&count| count > 1);

    if !bijective && !stacked {
        return false;
    }

    if spec.has_weights()
        && spec.combination.requires_weight_match()
        && !weights_match(spec, counts)
    {
        warn!(
            combination = ?spec.combination,
            "Vector counts do not match target weights, sending vectors unweighted"
        );
        return false;
    }

    true
}
