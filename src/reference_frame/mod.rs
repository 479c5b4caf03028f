// Copyright (c) 2024 Swift Navigation Inc.
// Contact: Swift Navigation <dev@swiftnav.com>
//
// This source is subject to the license found in the file 'LICENSE' which must
// be be distributed together with this source. All other rights reserved.
//
// THIS CODE AND INFORMATION IS PROVIDED "AS IS" WITHOUT WARRANTY OF ANY KIND,
// EITHER EXPRESSED OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE IMPLIED
// WARRANTIES OF MERCHANTABILITY AND/OR FITNESS FOR A PARTICULAR PURPOSE.
//! Geodetic reference frame transformations
//!
//! Geodetic reference frames define the coordinate system used to represent
//! positions on the Earth. Different reference frames are commonly used in
//! different regions of the world, and for different purposes. For example,
//! global reference frames, such as the International Terrestrial Reference
//! Frame (ITRF), are used for global positioning, while regional reference
//! frames, such as the European Terrestrial Reference Frame (ETRF), are used
//! for regional positioning. Due to the movement of the earth's crust apparently
//! fixed positions will move over time. Because of this it's important to note
//! only take note of a position, but also the time at which that position was
//! determined. In most regions of the earth the crust moves at a constant speed,
//! meaning that if you are able to determine the local velocity of the crust you
//! can easily determine what the position of a static point would have been in
//! the past. It is commong for regional reference frames to define a common reference
//! epoch that all positions should be transformed to, allowing the direct comparison
//! of positions even if they were determined at different times. Regional reference
//! frames also typically are defined to be "fixed" to a particular tectonic plate,
//! meaning the large majority of the velocity for points on that tectonic plate
//! are cancelled out. In contrast, global reference frames are not fixed to
//! any particular tectonic plate, so most places on earth will have a measurable
//! velocity. Global reference frames also typically do not have a common reference
//! epoch, so determining one's local velocity is important to be able to compare
//! positions or to transform a coordinate from a global reference frame to a regional
//! reference frame.
//!
//! This module provides several types and functions to help transform a set of coordinates
//! from one reference frame to another, and from one epoch to another. Several sets of
//! transformation parameters are included for converting between common reference frames.
//! To start out, you must have a [`Coordinate`] that you want to transform. This consists of a
//! position, an epoch, and a reference frame as well as an optional velocity. You then need to
//! get the [`Transformation`] object that describes the transformation from the reference
//! frame of the coordinate to the desired reference frame. You can then call the `transform`
//! method on the transformation object to get a new coordinate in the desired reference frame.
//! This transformation will change the position and velocity of the coordinate, but it does
//! not the change the epoch of the coordinate. If you need to change the epoch of the
//! coordinate you will need to use the [`Coordinate::adjust_epoch`](crate::coords::Coordinate::adjust_epoch)
//! method which uses the velocity of the coordinate to determine the position at the new epoch.
//!
//! # Example
//! ```
//! use gnss_engine::{
//!     coords::{Coordinate, ECEF},
//!     reference_frame::{TransformationRepository, ReferenceFrame, TransformationNotFound},
//!     time::UtcTime
//! };
//!
//! // Can also load your own transformations at runtime
//! let transformation_repo = TransformationRepository::from_builtin();
//!
//! let epoch_2020 = UtcTime::from_parts(2020, 3, 15, 0, 0, 0.).to_gps_hardcoded();
//! let itrf_coord = Coordinate::with_velocity(
//!     ReferenceFrame::ITRF2014, // The reference frame of the coordinate
//!     ECEF::new(-2703764.0, -4261273.0, 3887158.0), // The position of the coordinate
//!     ECEF::new(-0.221, 0.254, 0.122), // The velocity of the coordinate
//!     epoch_2020); // The epoch of the coordinate
//!
//! let epoch_2010 = UtcTime::from_parts(2010, 1, 1, 0, 0, 0.).to_gps_hardcoded();
//! let itrf_coord = itrf_coord.adjust_epoch(&epoch_2010); // Change the epoch of the coordinate
//!
//! let nad83_coord = transformation_repo.transform(itrf_coord.clone(), &ReferenceFrame::NAD83_2011);
//! ```
//!

use crate::coords::{Coordinate, ECEF};
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet, VecDeque},
    fmt,
};
use strum::{Display, EnumIter, EnumString};

mod params;

/// Reference Frames
///
/// Some well known reference frames are included. Other
/// reference frames are supported via the [`ReferenceFrame::Other`]
/// variant which holds the reference frame name as a [`String`]
#[derive(
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Clone,
    EnumString,
    Display,
    EnumIter,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ReferenceFrame {
    ITRF88,
    ITRF89,
    ITRF90,
    ITRF91,
    ITRF92,
    ITRF93,
    ITRF94,
    ITRF96,
    ITRF97,
    ITRF2000,
    ITRF2005,
    ITRF2008,
    ITRF2014,
    ITRF2020,
    ETRF89,
    ETRF90,
    ETRF91,
    ETRF92,
    ETRF93,
    ETRF94,
    ETRF96,
    ETRF97,
    ETRF2000,
    ETRF2005,
    ETRF2014,
    ETRF2020,
    /// i.e. NAD83(2011)
    #[strum(to_string = "NAD83(2011)", serialize = "NAD83_2011")]
    NAD83_2011,
    /// i.e. NAD83(CSRS) - Canadian Spatial Reference System
    #[allow(non_camel_case_types)]
    #[strum(to_string = "NAD83(CSRS)", serialize = "NAD83_CSRS")]
    NAD83_CSRS,
    #[allow(non_camel_case_types)]
    #[strum(to_string = "DREF91(R2016)", serialize = "DREF91_R2016")]
    DREF91_R2016,
    #[allow(non_camel_case_types)]
    #[strum(to_string = "WGS84(G1762)", serialize = "WGS84_G1762")]
    WGS84_G1762,
    #[allow(non_camel_case_types)]
    #[strum(to_string = "WGS84(G2139)", serialize = "WGS84_G2139")]
    WGS84_G2139,
    #[allow(non_camel_case_types)]
    #[strum(to_string = "WGS84(G2296)", serialize = "WGS84_G2296")]
    WGS84_G2296,
    /// Custom reference frame with user-defined name
    #[strum(transparent, default)]
    #[serde(untagged)]
    Other(String),
}

impl PartialEq<&ReferenceFrame> for ReferenceFrame {
    fn eq(&self, other: &&ReferenceFrame) -> bool {
        self == *other
    }
}

impl PartialEq<ReferenceFrame> for &ReferenceFrame {
    fn eq(&self, other: &ReferenceFrame) -> bool {
        *self == other
    }
}

/// 15-parameter Helmert transformation parameters
///
/// This is an extension of the 7-parameter Helmert transformation
/// where each term has an additional time-dependent term. This
/// transformation consists of a 3 dimensional translation,
/// 3 dimensional rotation, and a universal scaling. The tranformation
/// takes the form of:
///
/// $$
///  \begin{bmatrix} X \\\\ Y \\\\ Z \end{bmatrix}\_{REF2} =
///  \begin{bmatrix} X \\\\ Y \\\\ Z \end{bmatrix}\_{REF1} +
///  \begin{bmatrix} \bar{t}_x \\\\ \bar{t}_y \\\\ \bar{t}_z \end{bmatrix} +
///  \begin{bmatrix}   \bar{s} & -\bar{r}_z & \bar{r}_y \\\\
///                    \bar{r}_z & \bar{s} & -\bar{r}_x \\\\
///                    -\bar{r}_y  & \bar{r}_x & \bar{s} \end{bmatrix}
///  \begin{bmatrix} X \\\\ Y \\\\ Z \end{bmatrix}\_{REF1}
/// $$
///
/// Where each $\bar{}$ parameter in the transformation is time
/// dependent and is defined to be:
///
/// $$ \bar{p}(t) = p + \dot{p}(t - \tau) $$
///
/// Where $p$ is the constant value, $\dot{p}$ is the rate of
/// change, and $\tau$ is the reference epoch.
///
/// # Sign Convention
///
/// There are several sign conventions in use for the rotation
/// parameters in Helmert transformations. In this implementation
/// we follow the IERS conventions, which is opposite of the original
/// formulation of the Helmert transformation.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy, Serialize, Deserialize)]
pub struct TimeDependentHelmertParams {
    t: Vector3<f64>,
    t_dot: Vector3<f64>,
    s: f64,
    s_dot: f64,
    r: Vector3<f64>,
    r_dot: Vector3<f64>,
    epoch: f64,
}

impl TimeDependentHelmertParams {
    const TRANSLATE_SCALE: f64 = 1.0e-3;
    const SCALE_SCALE: f64 = 1.0e-9;
    const ROTATE_SCALE: f64 = (std::f64::consts::PI / 180.0) * (0.001 / 3600.0);

    /// Reverses the transformation. Since this is a linear transformation we simply negate all terms
    pub fn invert(mut self) -> Self {
        self.t *= -1.0;
        self.t_dot *= -1.0;
        self.s *= -1.0;
        self.s_dot *= -1.0;
        self.r *= -1.0;
        self.r_dot *= -1.0;

        self
    }

    /// Apply the transformation to a position at a specific epoch
    #[must_use]
    pub fn transform_position(&self, position: &ECEF, epoch: f64) -> ECEF {
        let dt = epoch - self.epoch;
        let t = (self.t + self.t_dot * dt) * Self::TRANSLATE_SCALE;
        let s = (self.s + self.s_dot * dt) * Self::SCALE_SCALE;
        let r = (self.r + self.r_dot * dt) * Self::ROTATE_SCALE;

        let m = Self::make_rotation_matrix(s, r);

        (position.as_vector() + t + m * position.as_vector()).into()
    }

    /// Apply the transformation to a velocity at a specific position
    #[must_use]
    pub fn transform_velocity(&self, velocity: &ECEF, position: &ECEF) -> ECEF {
        let t = self.t_dot * Self::TRANSLATE_SCALE;
        let s = self.s_dot * Self::SCALE_SCALE;
        let r = self.r_dot * Self::ROTATE_SCALE;

        let m = Self::make_rotation_matrix(s, r);

        (velocity.as_vector() + t + m * position.as_vector()).into()
    }

    #[must_use]
    fn make_rotation_matrix(s: f64, r: Vector3<f64>) -> Matrix3<f64> {
        Matrix3::new(s, -r.z, r.y, r.z, s, -r.x, -r.y, r.x, s)
    }

    pub fn transform(
        &self,
        position: &ECEF,
        velocity: Option<&ECEF>,
        epoch: f64,
    ) -> (ECEF, Option<ECEF>) {
        let position = self.transform_position(position, epoch);
        let velocity = velocity.map(|v| self.transform_velocity(v, &position));

        (position, velocity)
    }
}

/// A transformation from one reference frame to another.
#[derive(Debug, PartialEq, PartialOrd, Clone, Serialize, Deserialize)]
pub struct Transformation {
    #[serde(
        alias = "source",
        alias = "source_name",
        alias = "frames.source",
        alias = "frames.source_name"
    )]
    pub from: ReferenceFrame,
    #[serde(alias = "destination", alias = "destination_name")]
    pub to: ReferenceFrame,
    pub params: TimeDependentHelmertParams,
}

impl Transformation {
    /// Transform the given coordinate, producing a new coordinate.
    ///
    /// Reference frame transformations do not change the epoch of the
    /// coordinate.
    ///
    /// # Errors
    ///
    /// [`TransformationNotFound`] Is returned as an error if there is a mismatch between
    /// the coordinate reference frame and the [`Transformation::from`] field.
    #[must_use]
    pub fn transform(&self, coord: Coordinate) -> Result<Coordinate, TransformationNotFound> {
        if coord.reference_frame() != self.from {
            return Err(TransformationNotFound(
                self.from.clone(),
                coord.reference_frame().clone(),
            ));
        }

        let (new_position, new_velocity) = self.params.transform(
            &coord.position(),
            coord.velocity().as_ref(),
            coord.epoch().to_fractional_year_hardcoded(),
        );

        Ok(Coordinate::new(
            self.to.clone(),
            new_position,
            new_velocity,
            coord.epoch(),
        ))
    }

    /// Reverse the transformation
    #[must_use]
    pub fn invert(mut self) -> Self {
        std::mem::swap(&mut self.from, &mut self.to);
        self.params = self.params.invert();
        self
    }
}

/// Error indicating that no transformation was found between two reference frames
///
/// This error is returned when trying to find a transformation between two reference frames
/// and no transformation is found.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct TransformationNotFound(ReferenceFrame, ReferenceFrame);

impl fmt::Display for TransformationNotFound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "No transformation found from {} to {}", self.0, self.1)
    }
}

impl std::error::Error for TransformationNotFound {}

type TransformationGraph =
    HashMap<ReferenceFrame, HashMap<ReferenceFrame, TimeDependentHelmertParams>>;

/// A repository for managing reference frame transformations
///
/// This struct allows for loading the builtin transformations
/// as well as adding additional transformations from other sources.
#[derive(Debug, Clone)]
pub struct TransformationRepository {
    transformations: TransformationGraph,
}

impl TransformationRepository {
    /// Create an empty transformation repository
    pub fn new() -> Self {
        Self {
            transformations: TransformationGraph::new(),
        }
    }

    /// Create a repository from a list of transformations
    ///
    /// # Note
    ///
    /// If there are duplicated transformations in the list, the
    /// last one in the list will take priority
    pub fn from_transformations<T: IntoIterator<Item = Transformation>>(
        transformations: T,
    ) -> Self {
        let mut repo = Self::new();
        repo.extend(transformations);
        repo
    }

    /// Create a repository with the builtin transformations
    pub fn from_builtin() -> Self {
        Self::from_transformations(builtin_transformations())
    }

    /// Add a transformation to the repository
    ///
    /// This will rebuild the internal graph to include the new transformation.
    pub fn add_transformation(&mut self, transformation: Transformation) {
        let from = transformation.from;
        let to = transformation.to;
        let params = transformation.params;
        let inverted_params = params.invert();

        self.transformations
            .entry(from.clone())
            .or_default()
            .extend([(to.clone(), params)]);

        // Add inverted parameters as well
        self.transformations
            .entry(to)
            .or_default()
            .extend([(from, inverted_params)]);
    }

    /// Transform a [`Coordinate`] to a new reference frame
    ///
    /// This function finds the shortest series of transformations from the coordinate's
    /// initial reference frame to the requestest one, then sequentially applies
    /// those transformations to get the new position and velocity. The epoch of the
    /// coordinate is not modified in this process.
    ///
    /// # Errors
    ///
    /// [`TransformationNotFound`] is returned as an error if no path from the
    /// coordinate's reference frame to the requested reference frame could be found
    /// in the repository.
    pub fn transform(
        &self,
        coord: Coordinate,
        to: &ReferenceFrame,
    ) -> Result<Coordinate, TransformationNotFound> {
        let epoch = coord.epoch().to_fractional_year_hardcoded();

        let accumulate_transformations = |(position, velocity): (ECEF, Option<ECEF>),
                                          params: &TimeDependentHelmertParams|
         -> (ECEF, Option<ECEF>) {
            params.transform(&position, velocity.as_ref(), epoch)
        };

        let (position, velocity) = self
            .get_shortest_path(coord.reference_frame(), to)?
            .into_iter()
            .fold(
                (coord.position(), coord.velocity()),
                accumulate_transformations,
            );

        Ok(Coordinate::new(
            to.clone(),
            position,
            velocity,
            coord.epoch(),
        ))
    }

    /// Get the shortest path between two reference frames
    ///
    /// Returns a list of transformations that need to be applied in sequence
    /// to transform from the source to the destination frame. Uses breadth-first
    /// search to find the path with the minimum number of transformation steps.
    ///
    /// An empty vector will be returned if the two reference frames are the same.
    ///
    /// # Errors
    ///
    /// [`TransformationNotFound`] will be returned as an error if
    /// no path could be found between the two reference frames
    fn get_shortest_path(
        &self,
        from: &ReferenceFrame,
        to: &ReferenceFrame,
    ) -> Result<Vec<&TimeDependentHelmertParams>, TransformationNotFound> {
        if from == to {
            return Ok(Vec::new());
        }

        let mut visited: HashSet<&ReferenceFrame> = HashSet::new();
        let mut queue: VecDeque<(&ReferenceFrame, Vec<&TimeDependentHelmertParams>)> =
            VecDeque::new();
        queue.push_back((from, Vec::new()));

        while let Some((current_frame, path)) = queue.pop_front() {
            if current_frame == to {
                return Ok(path);
            }

            if let Some(neighbors) = self.transformations.get(current_frame) {
                for neighbor in neighbors {
                    if !visited.contains(neighbor.0) {
                        visited.insert(neighbor.0);
                        let mut new_path = path.clone();
                        new_path.push(neighbor.1);
                        queue.push_back((neighbor.0, new_path));
                    }
                }
            }
        }

        Err(TransformationNotFound(from.clone(), to.clone()))
    }

    /// Get the number of transformations stored in the repository
    pub fn count(&self) -> usize {
        self.transformations
            .values()
            .map(|neighbors| neighbors.len())
            .sum()
    }
}

impl Default for TransformationRepository {
    fn default() -> Self {
        Self::from_builtin()
    }
}

impl Extend<Transformation> for TransformationRepository {
    fn extend<T: IntoIterator<Item = Transformation>>(&mut self, iter: T) {
        iter.into_iter()
            .for_each(|transformation| self.add_transformation(transformation));
    }
}

/// Get the builtin transformations as a Vec
///
/// This function converts the static transformation array into a Vec
/// that can be used for serialization or with TransformationRepository.
pub fn builtin_transformations() -> Vec<Transformation> {
    params::TRANSFORMATIONS.to_vec()
}
