//! Host backend. The matrix product delegates to `matrixmultiply`; the
//! remaining kernels are plain loops over row-major data.

/// `lhs · rhs` for row-major `m × k` and `k × n` operands.
pub(crate) fn gemm(m: usize, k: usize, n: usize, lhs: &[f32], rhs: &[f32]) -> Vec<f32> {
    debug_assert_eq!(lhs.len(), m * k);
    debug_assert_eq!(rhs.len(), k * n);

    let mut out = vec![0.0; m * n];
    // SAFETY: the strides describe exactly the row-major slices checked above.
    unsafe {
        matrixmultiply::sgemm(
            m,
            k,
            n,
            1.0,
            lhs.as_ptr(),
            k as isize,
            1,
            rhs.as_ptr(),
            n as isize,
            1,
            0.0,
            out.as_mut_ptr(),
            n as isize,
            1,
        );
    }
    out
}

pub(crate) fn transpose(rows: usize, cols: usize, data: &[f32]) -> Vec<f32> {
    let mut out = vec![0.0; data.len()];
    for r in 0..rows {
        for c in 0..cols {
            out[c * rows + r] = data[r * cols + c];
        }
    }
    out
}

pub(crate) fn arange(len: usize) -> Vec<f32> {
    (0..len).map(|i| i as f32).collect()
}

pub(crate) fn add_scalar(data: &[f32], rhs: f32) -> Vec<f32> {
    data.iter().map(|v| v + rhs).collect()
}

pub(crate) fn div_scalar(data: &[f32], rhs: f32) -> Vec<f32> {
    data.iter().map(|v| v / rhs).collect()
}

pub(crate) fn sum(data: &[f32]) -> f32 {
    data.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemm_2x3_3x2() {
        let lhs = [1., 2., 3., 4., 5., 6.];
        let rhs = [7., 8., 9., 10., 11., 12.];
        assert_eq!(gemm(2, 3, 2, &lhs, &rhs), vec![58., 64., 139., 154.]);
    }

    #[test]
    fn test_transpose_2x3() {
        let data = [1., 2., 3., 4., 5., 6.];
        assert_eq!(transpose(2, 3, &data), vec![1., 4., 2., 5., 3., 6.]);
    }

    #[test]
    fn test_elementwise() {
        assert_eq!(arange(4), vec![0., 1., 2., 3.]);
        assert_eq!(add_scalar(&[1., 2.], 1.0), vec![2., 3.]);
        assert_eq!(div_scalar(&[2., 4.], 2.0), vec![1., 2.]);
        assert_eq!(sum(&[1., 2., 3.]), 6.0);
    }
}
