//! Missing-data handling shared by the kernels.
//!
//! NaN marks "no data". A window with a missing neighbour is smoothed by
//! substituting the mean of its valid samples before blending.

/// Mean of the non-NaN values, or NaN when there are none.
pub fn mean_of_valid(samples: &[f64]) -> f64 {
    let (sum, count) = samples
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0_f64, 0usize), |(sum, count), v| (sum + *v, count + 1));

    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Replace every NaN in `samples` with the mean of the valid samples.
///
/// A window without any valid sample is left untouched.
pub fn replace_nan_with_mean(samples: &mut [f64]) {
    let mean = mean_of_valid(samples);
    if mean.is_nan() {
        return;
    }

    for value in samples.iter_mut().filter(|v| v.is_nan()) {
        *value = mean;
    }
}
