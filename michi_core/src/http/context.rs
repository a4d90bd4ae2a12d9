use std::collections::HashMap;

use michi_lib::url_encoding::DecodeError;

use crate::debug_trace;
use crate::url::{extract_params, extract_splat, split_path};

/// Per-request route bindings.
///
/// Holds the named-parameter map and the wildcard captures produced by
/// matching one request path against one route template. Built fresh for
/// every request and never shared, so no synchronization is involved.
#[derive(Debug, Clone, Default)]
pub struct RouteContext {
    param_map: HashMap<String, String>,
    splat_list: Vec<String>,
}

impl RouteContext {
    /// Create an empty context, before any route has been matched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute both binding structures from a request path and the route
    /// template it matched. Params and splat are always derived together
    /// from the same segment pair.
    pub fn update(&mut self, request_path: &str, route_path: &str) -> Result<(), DecodeError> {
        let request = split_path(request_path);
        let matched = split_path(route_path);
        self.param_map = extract_params(&request, &matched)?;
        self.splat_list = extract_splat(&request, &matched)?;
        debug_trace!(
            "update: '{}' against '{}' bound {} params, {} splats",
            request_path,
            route_path,
            self.param_map.len(),
            self.splat_list.len()
        );
        Ok(())
    }

    /// Look up a named parameter. The lookup is case-insensitive and a
    /// leading `:` is tolerated, so `param("id")` and `param(":ID")` find
    /// the same binding.
    pub fn param(&self, name: &str) -> Option<&str> {
        let name = name.strip_prefix(':').unwrap_or(name).to_lowercase();
        self.param_map.get(&name).map(String::as_str)
    }

    /// All named-parameter bindings.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.param_map
    }

    /// The wildcard capture at the given position, left to right.
    pub fn splat(&self, index: usize) -> Option<&str> {
        self.splat_list.get(index).map(String::as_str)
    }

    /// All wildcard captures in pattern order.
    pub fn splats(&self) -> &[String] {
        &self.splat_list
    }
}

/// Map every key through a lookup, or get `None` if any lookup misses.
/// Useful for pulling a required set of parameters in one shot.
pub fn map_keys_or_none<F>(keys: &[&str], f: F) -> Option<Vec<String>>
where
    F: Fn(&str) -> Option<String>,
{
    keys.iter().map(|key| f(key)).collect()
}
