use indexmap::{IndexMap, IndexSet};

use crate::policy::exprs::{AfiScope, Cast, Version};
use crate::policy::grammar::LexedAfi;

fn resolve_cast(version: Version, casts: &IndexSet<Cast>) -> Cast {
    if casts.contains(&Cast::Any)
        || (casts.contains(&Cast::Unicast) && casts.contains(&Cast::Multicast))
    {
        return Cast::Any;
    }
    match casts.get_index(0) {
        Some(cast) if casts.len() == 1 => *cast,
        _ => unreachable!("no single cast left for {} in {:?}", version, casts),
    }
}

///
/// Resolves an `afi` list into the address families its rules apply to.
///
/// Every version keeps one cast: `any` when the list names `any` (a missing
/// cast means `any`) or both unicast and multicast for it, otherwise the one
/// cast it named. When ipv4 and ipv6 end up with the same cast they are
/// merged into a single `(any, cast)` entry.
///
pub fn merge_afi<I>(afis: I) -> AfiScope
where
    I: IntoIterator<Item = LexedAfi>,
{
    let mut afi_sets: IndexMap<Version, IndexSet<Cast>> = IndexMap::new();
    for afi in afis {
        afi_sets
            .entry(afi.version)
            .or_default()
            .insert(afi.cast.unwrap_or(Cast::Any));
    }

    let resolved = afi_sets
        .iter()
        .map(|(version, casts)| (*version, resolve_cast(*version, casts)))
        .collect::<IndexMap<Version, Cast>>();

    match (resolved.get(&Version::Ipv4), resolved.get(&Version::Ipv6)) {
        (Some(v4), Some(v6)) if v4 == v6 => vec![(Version::Any, *v4)],
        _ => resolved.into_iter().collect(),
    }
}
