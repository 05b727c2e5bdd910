use super::Kernel;
use ndarray::{Array2, arr2};

/// 常用3x3卷积核预设
pub struct KernelSamples;

impl KernelSamples {
    pub const IDENTITY: &'static str = "Identity";
    pub const SHARPEN: &'static str = "Sharpen";
    pub const GAUSSIAN: &'static str = "Gaussian 3x3 (Blur)";
    pub const EMBOSS: &'static str = "Emboss";
    pub const OUTLINE: &'static str = "Outline (Edge Detection)";
    pub const LEFT_SOBEL: &'static str = "Left Sobel";
    pub const RIGHT_SOBEL: &'static str = "Right Sobel";
    pub const TOP_SOBEL: &'static str = "Top Sobel";
    pub const BOTTOM_SOBEL: &'static str = "Bottom Sobel";

    /// 所有预设，按界面上的显示顺序
    pub fn list() -> Vec<Kernel> {
        [
            Self::IDENTITY,
            Self::SHARPEN,
            Self::GAUSSIAN,
            Self::EMBOSS,
            Self::OUTLINE,
            Self::LEFT_SOBEL,
            Self::RIGHT_SOBEL,
            Self::TOP_SOBEL,
            Self::BOTTOM_SOBEL,
        ]
        .into_iter()
        .map(Self::from_name)
        .collect()
    }

    /// 按名称取预设，未知名称回退到Identity
    pub fn from_name(name: &str) -> Kernel {
        let (name, data) = match name {
            Self::SHARPEN => (
                Self::SHARPEN,
                arr2(&[[0., -1., 0.], [-1., 5., -1.], [0., -1., 0.]]),
            ),
            Self::GAUSSIAN => (
                Self::GAUSSIAN,
                arr2(&[
                    [0.0625, 0.125, 0.0625],
                    [0.125, 0.25, 0.125],
                    [0.0625, 0.125, 0.0625],
                ]),
            ),
            Self::EMBOSS => (
                Self::EMBOSS,
                arr2(&[[-2., -1., 0.], [-1., 1., 1.], [0., 1., 2.]]),
            ),
            Self::OUTLINE => (
                Self::OUTLINE,
                arr2(&[[-1., -1., -1.], [-1., 8., -1.], [-1., -1., -1.]]),
            ),
            Self::LEFT_SOBEL => (
                Self::LEFT_SOBEL,
                arr2(&[[1., 0., -1.], [2., 0., -2.], [1., 0., -1.]]),
            ),
            Self::RIGHT_SOBEL => (
                Self::RIGHT_SOBEL,
                arr2(&[[-1., 0., 1.], [-2., 0., 2.], [-1., 0., 1.]]),
            ),
            Self::TOP_SOBEL => (
                Self::TOP_SOBEL,
                arr2(&[[1., 2., 1.], [0., 0., 0.], [-1., -2., -1.]]),
            ),
            Self::BOTTOM_SOBEL => (
                Self::BOTTOM_SOBEL,
                arr2(&[[-1., -2., -1.], [0., 0., 0.], [1., 2., 1.]]),
            ),
            _ => (Self::IDENTITY, Array2::eye(3)),
        };
        Kernel::preset(name, data)
    }
}
