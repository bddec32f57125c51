//! Particle network: nodes on a jittered shell joined to their nearest
//! neighbours, drawn behind the contact section.

use std::collections::BTreeSet;
use std::f32::consts::TAU;

use rand::Rng;
use serde::Serialize;

use super::{CameraRig, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkParams {
    pub nodes: usize,
    pub radius: f32,
    /// Fraction of `radius` each node may drift in or out of the shell.
    pub jitter: f32,
    pub link_distance: f32,
    pub max_links: usize,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self { nodes: 120, radius: 1.5, jitter: 0.15, link_distance: 0.7, max_links: 3 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkScene {
    /// Flat xyz triples.
    pub nodes: Vec<f32>,
    pub edges: Vec<Edge>,
    pub node_color: &'static str,
    pub edge_color: &'static str,
    pub spin: f32,
    pub camera: CameraRig,
}

impl NetworkScene {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, params: &NetworkParams) -> Self {
        let points: Vec<Vec3> = (0..params.nodes).map(|_| shell_point(rng, params)).collect();
        let edges = link_nearest(&points, params.link_distance, params.max_links);

        let mut nodes = Vec::with_capacity(points.len() * 3);
        for p in &points {
            p.push_onto(&mut nodes);
        }

        Self {
            nodes,
            edges,
            node_color: "#915EFF",
            edge_color: "#4a9eff",
            spin: 0.05,
            camera: CameraRig { position: Vec3::new(0.0, 0.0, 4.0), fov_deg: 50.0 },
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len() / 3
    }
}

fn shell_point<R: Rng + ?Sized>(rng: &mut R, params: &NetworkParams) -> Vec3 {
    let theta = TAU * rng.random::<f32>();
    let phi = (2.0 * rng.random::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    let r = params.radius * (1.0 + params.jitter * (2.0 * rng.random::<f32>() - 1.0));
    Vec3::new(r * phi.sin() * theta.cos(), r * phi.sin() * theta.sin(), r * phi.cos())
}

/// Join each point to at most `max_links` of its nearest neighbours closer
/// than `link_distance`. Edges are undirected and stored once with `a < b`,
/// so a node can end up with more than `max_links` edges when others pick it.
fn link_nearest(points: &[Vec3], link_distance: f32, max_links: usize) -> Vec<Edge> {
    if link_distance.is_nan() || link_distance <= 0.0 || max_links == 0 {
        return Vec::new();
    }

    let mut pairs: BTreeSet<(usize, usize)> = BTreeSet::new();
    for (i, p) in points.iter().enumerate() {
        let mut near: Vec<(usize, f32)> = points
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(j, q)| (j, p.distance(*q)))
            .filter(|(_, d)| *d < link_distance)
            .collect();
        near.sort_by(|a, b| a.1.total_cmp(&b.1));
        for (j, _) in near.into_iter().take(max_links) {
            pairs.insert((i.min(j), i.max(j)));
        }
    }

    pairs
        .into_iter()
        .map(|(a, b)| Edge {
            a,
            b,
            opacity: (1.0 - points[a].distance(points[b]) / link_distance).clamp(0.0, 1.0),
        })
        .collect()
}

#[cfg(test)]
#[path = "network_test.rs"]
mod tests;
