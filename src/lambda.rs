// Copyright (c) 2025 Swift Navigation Inc.
// Contact: Swift Navigation <dev@swiftnav.com>
//
// This source is subject to the license found in the file 'LICENSE' which must
// be be distributed together with this source. All other rights reserved.
//
// THIS CODE AND INFORMATION IS PROVIDED "AS IS" WITHOUT WARRANTY OF ANY KIND,
// EITHER EXPRESSED OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE IMPLIED
// WARRANTIES OF MERCHANTABILITY AND/OR FITNESS FOR A PARTICULAR PURPOSE.
//! Integer ambiguity resolution (LAMBDA)
//!
//! [`AmbiguityFixer`] takes the float baseline and float double-difference
//! ambiguities produced by [`crate::rtk::RtkEngine`], together with their
//! joint covariance, and attempts to fix the ambiguities to integers via
//! LD factorization, integer Gauss/permutation reduction, and a
//! depth-first search (mlambda) for the best two integer candidates.

use nalgebra::{DMatrix, DVector, Vector3};

const LOOP_MAX: usize = 5000;
/// Minimum accepted ratio between the second-best and best candidate's
/// residual sum of squares
pub const DEFAULT_RATIO_THRESHOLD: f64 = 3.0;

/// Failure modes of the reduction/search stage
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum LambdaError {
    #[error("ambiguity covariance is not positive definite")]
    InitializeFail,
    #[error("search exceeded {LOOP_MAX} nodes")]
    SearchOverflow,
}

/// Outcome of a call to [`AmbiguityFixer::fix`]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum FixState {
    #[default]
    NotAttempted,
    InitializeFail,
    SearchOverflow,
    RatioRejected,
    FixSuccess,
}

fn round(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn sgn(x: f64) -> f64 {
    if x <= 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// `Q = L D L^T`, `L` lower-unit-triangular, `D` diagonal positive
fn ld_factorize(q: &DMatrix<f64>) -> Result<(DMatrix<f64>, DVector<f64>), LambdaError> {
    let n = q.nrows();
    let mut a = q.clone();
    let mut l = DMatrix::<f64>::zeros(n, n);
    let mut d = DVector::<f64>::zeros(n);

    for i in (0..n).rev() {
        d[i] = a[(i, i)];
        if d[i] <= 0.0 {
            return Err(LambdaError::InitializeFail);
        }
        let sqrt_d = d[i].sqrt();
        for j in 0..=i {
            l[(i, j)] = a[(i, j)] / sqrt_d;
        }
        for j in 0..i {
            for k in 0..=j {
                a[(j, k)] -= l[(i, k)] * l[(i, j)];
            }
        }
        let diag = l[(i, i)];
        for j in 0..=i {
            l[(i, j)] /= diag;
        }
    }
    Ok((l, d))
}

fn gauss(n: usize, l: &mut DMatrix<f64>, z: &mut DMatrix<f64>, i: usize, j: usize) {
    let mu = round(l[(i, j)]);
    if mu != 0.0 {
        for k in i..n {
            l[(k, j)] -= mu * l[(k, i)];
        }
        for k in 0..n {
            z[(k, j)] -= mu * z[(k, i)];
        }
    }
}

fn perm(n: usize, l: &mut DMatrix<f64>, d: &mut DVector<f64>, j: usize, del: f64, z: &mut DMatrix<f64>) {
    let eta = d[j] / del;
    let lam = d[j + 1] * l[(j + 1, j)] / del;
    d[j] = eta * d[j + 1];
    d[j + 1] = del;
    for k in 0..j {
        let a0 = l[(j, k)];
        let a1 = l[(j + 1, k)];
        l[(j, k)] = -l[(j + 1, j)] * a0 + a1;
        l[(j + 1, k)] = eta * a0 + lam * a1;
    }
    l[(j + 1, j)] = lam;
    for k in (j + 2)..n {
        l.swap((k, j), (k, j + 1));
    }
    for k in 0..n {
        z.swap((k, j), (k, j + 1));
    }
}

/// Integer Gauss reduction plus conditional permutations, until stable
fn reduce(n: usize, l: &mut DMatrix<f64>, d: &mut DVector<f64>, z: &mut DMatrix<f64>) {
    if n < 2 {
        return;
    }
    let mut j = n - 2;
    let mut k = n - 2;
    loop {
        if j <= k {
            for i in (j + 1)..n {
                gauss(n, l, z, i, j);
            }
        }
        let del = d[j] + l[(j + 1, j)] * l[(j + 1, j)] * d[j + 1];
        if del + 1e-6 < d[j + 1] {
            perm(n, l, d, j, del, z);
            k = j;
            j = n - 2;
        } else if j == 0 {
            break;
        } else {
            j -= 1;
        }
    }
}

/// Modified LAMBDA tree search for the best `m` integer candidates
fn search(n: usize, m: usize, l: &DMatrix<f64>, d: &DVector<f64>, zs: &DVector<f64>) -> Result<(Vec<DVector<f64>>, Vec<f64>), LambdaError> {
    let mut s_block = vec![vec![0.0_f64; n]; n];
    let mut dist = vec![0.0_f64; n];
    let mut zb = vec![0.0_f64; n];
    let mut z = vec![0.0_f64; n];
    let mut step = vec![0.0_f64; n];

    let mut zn: Vec<Vec<f64>> = vec![vec![0.0; n]; m];
    let mut s = vec![0.0_f64; m];
    let mut nn = 0usize;
    let mut imax = 0usize;
    let mut maxdist = f64::MAX;

    let mut k = n - 1;
    dist[k] = 0.0;
    zb[k] = zs[k];
    z[k] = round(zb[k]);
    let mut y = zb[k] - z[k];
    step[k] = sgn(y);

    for _ in 0..LOOP_MAX {
        let newdist = dist[k] + y * y / d[k];
        if newdist < maxdist {
            if k != 0 {
                k -= 1;
                dist[k] = newdist;
                for i in 0..=k {
                    s_block[k][i] = s_block[k + 1][i] + (z[k + 1] - zb[k + 1]) * l[(k + 1, i)];
                }
                zb[k] = zs[k] + s_block[k][k];
                z[k] = round(zb[k]);
                y = zb[k] - z[k];
                step[k] = sgn(y);
            } else {
                if nn < m {
                    if nn == 0 || newdist > s[imax] {
                        imax = nn;
                    }
                    zn[nn] = z.clone();
                    s[nn] = newdist;
                    nn += 1;
                } else if newdist < s[imax] {
                    zn[imax] = z.clone();
                    s[imax] = newdist;
                    imax = 0;
                    for i in 0..m {
                        if s[imax] < s[i] {
                            imax = i;
                        }
                    }
                    maxdist = s[imax];
                }
                z[0] += step[0];
                y = zb[0] - z[0];
                step[0] = -step[0] - sgn(step[0]);
            }
        } else if k == n - 1 {
            let mut pairs: Vec<(f64, DVector<f64>)> = s
                .into_iter()
                .zip(zn.into_iter().map(DVector::from_vec))
                .collect();
            pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
            let (s_sorted, z_sorted): (Vec<f64>, Vec<DVector<f64>>) = pairs.into_iter().unzip();
            return Ok((z_sorted, s_sorted));
        } else {
            k += 1;
            z[k] += step[k];
            y = zb[k] - z[k];
            step[k] = -step[k] - sgn(step[k]);
        }
    }
    Err(LambdaError::SearchOverflow)
}

/// Reduce and search for the best two integer candidates for `a`, given its
/// covariance `qaa`
fn lambda_search(a: &DVector<f64>, qaa: &DMatrix<f64>) -> Result<(Vec<DVector<f64>>, Vec<f64>), LambdaError> {
    let n = a.len();
    let (mut l, mut d) = ld_factorize(qaa)?;
    let mut z = DMatrix::<f64>::identity(n, n);
    reduce(n, &mut l, &mut d, &mut z);

    let zs = z.transpose() * a;
    let (candidates_z, s) = search(n, 2, &l, &d, &zs)?;

    let zt_inv = z.transpose().try_inverse().ok_or(LambdaError::InitializeFail)?;
    let candidates: Vec<DVector<f64>> = candidates_z.iter().map(|zn| &zt_inv * zn).collect();
    Ok((candidates, s))
}

/// Fixes DD float ambiguities to integers given the joint baseline/ambiguity
/// covariance, and recovers the fixed baseline
pub struct AmbiguityFixer {
    float_baseline: Vector3<f64>,
    float_ambiguity: DVector<f64>,
    qxx: DMatrix<f64>,
    ratio_threshold: f64,
    state: FixState,
    ratio: f64,
    fixed_ambiguity: Option<DVector<f64>>,
    fixed_baseline: Option<Vector3<f64>>,
    fixed_qbb: Option<DMatrix<f64>>,
}

impl AmbiguityFixer {
    /// `qxx` is the `(3+n) x (3+n)` joint covariance of baseline then
    /// ambiguities, in that column/row order
    #[must_use]
    pub fn new(float_baseline: Vector3<f64>, float_ambiguity: DVector<f64>, qxx: DMatrix<f64>) -> AmbiguityFixer {
        AmbiguityFixer {
            float_baseline,
            float_ambiguity,
            qxx,
            ratio_threshold: DEFAULT_RATIO_THRESHOLD,
            state: FixState::NotAttempted,
            ratio: 0.0,
            fixed_ambiguity: None,
            fixed_baseline: None,
            fixed_qbb: None,
        }
    }

    #[must_use]
    pub fn with_ratio_threshold(mut self, threshold: f64) -> AmbiguityFixer {
        self.ratio_threshold = threshold;
        self
    }

    #[must_use]
    pub fn state(&self) -> FixState {
        self.state
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    #[must_use]
    pub fn fixed_baseline(&self) -> Option<Vector3<f64>> {
        self.fixed_baseline
    }

    /// Attempts to fix the ambiguities. Returns `true` iff fixing succeeded
    /// and passed the ratio test; the float solution remains valid either way.
    pub fn fix(&mut self) -> bool {
        let n = self.float_ambiguity.len();
        if self.qxx.nrows() != 3 + n || self.qxx.ncols() != 3 + n {
            self.state = FixState::InitializeFail;
            return false;
        }

        let qaa = self.qxx.view((3, 3), (n, n)).clone_owned();
        let qbb = self.qxx.view((0, 0), (3, 3)).clone_owned();
        let qba = self.qxx.view((0, 3), (3, n)).clone_owned();

        let (candidates, s) = match lambda_search(&self.float_ambiguity, &qaa) {
            Ok(result) => result,
            Err(LambdaError::InitializeFail) => {
                self.state = FixState::InitializeFail;
                return false;
            }
            Err(LambdaError::SearchOverflow) => {
                self.state = FixState::SearchOverflow;
                return false;
            }
        };

        self.ratio = s[1] / s[0];
        if self.ratio < self.ratio_threshold {
            self.state = FixState::RatioRejected;
            return false;
        }

        let Some(qaa_inv) = qaa.clone().try_inverse() else {
            self.state = FixState::InitializeFail;
            return false;
        };

        let fixed = candidates[0].clone();
        let delta = &self.float_ambiguity - &fixed;
        let correction = &qba * &qaa_inv * &delta;
        self.fixed_baseline = Some(Vector3::new(
            self.float_baseline.x - correction[0],
            self.float_baseline.y - correction[1],
            self.float_baseline.z - correction[2],
        ));
        self.fixed_qbb = Some(&qbb - &qba * &qaa_inv * qba.transpose());
        self.fixed_ambiguity = Some(fixed);
        self.state = FixState::FixSuccess;
        true
    }
}
