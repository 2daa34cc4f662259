//! Module containing all algorithms on dense distance matrices.

pub mod floyd_warshall;

pub mod diameter;
