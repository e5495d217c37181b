//! Validates the code examples from README.md compile and behave correctly.

#[test]
fn readme_core_api() {
    use zenflip::{
        ChannelOrder, Surface, SurfaceLayout, SurfaceMut, flip_vertical, flip_vertical_into,
    };

    let mut buf: Vec<u8> = (0..60).collect();
    let layout = SurfaceLayout::new(4, 3, 20, ChannelOrder::RGBA, true).unwrap();
    flip_vertical(&mut SurfaceMut::new(&mut buf, layout).unwrap());
    assert_eq!(buf[0], 40);
    assert_eq!(buf[16], 56);

    let src = vec![10u8, 20, 30, 40, 50, 60];
    let mut dst = vec![0u8; 8];
    let sl = SurfaceLayout::packed::<u8>(1, 2, ChannelOrder::RGB, false).unwrap();
    let dl = SurfaceLayout::packed::<u8>(1, 2, ChannelOrder::BGRA, true).unwrap();
    flip_vertical_into(
        &Surface::new(&src, sl).unwrap(),
        &mut SurfaceMut::new(&mut dst, dl).unwrap(),
    );
    assert_eq!(dst, [60, 50, 40, 255, 30, 20, 10, 255]);
}

#[test]
fn readme_strategy_table() {
    use zenflip::{ChannelOrder, SurfaceLayout, Strategy};

    let l = |order, alpha| SurfaceLayout::packed::<u8>(1, 1, order, alpha).unwrap();
    assert_eq!(
        Strategy::select(&l(ChannelOrder::RGBX, false), &l(ChannelOrder::RGBA, true)),
        Strategy::SameChannelOrder
    );
    assert_eq!(
        Strategy::select(&l(ChannelOrder::ARGB, true), &l(ChannelOrder::BGRA, true)),
        Strategy::Rgba
    );
    assert_eq!(
        Strategy::select(&l(ChannelOrder::BGR, false), &l(ChannelOrder::ABGR, true)),
        Strategy::RgbFullAlpha
    );
    assert_eq!(
        Strategy::select(&l(ChannelOrder::BGRA, true), &l(ChannelOrder::RGB, false)),
        Strategy::Rgb
    );
}

#[test]
fn readme_sample_types() {
    use zenflip::{ChannelOrder, Surface, SurfaceLayout, SurfaceMut, flip_vertical_into};

    let src = vec![0.25f32, 0.5, 0.75];
    let mut dst = vec![0.0f32; 4];
    let sl = SurfaceLayout::packed::<f32>(1, 1, ChannelOrder::RGB, false).unwrap();
    let dl = SurfaceLayout::packed::<f32>(1, 1, ChannelOrder::ARGB, true).unwrap();
    flip_vertical_into(
        &Surface::new(&src, sl).unwrap(),
        &mut SurfaceMut::new(&mut dst, dl).unwrap(),
    );
    assert_eq!(dst, [1.0, 0.25, 0.5, 0.75]);
}

#[cfg(feature = "rgb")]
#[test]
fn readme_typed_rgb() {
    use rgb::{Bgra, Rgb};
    use zenflip::{Surface, SurfaceMut, flip_vertical_into};

    let src = vec![Rgb::new(1u16, 2, 3), Rgb::new(4, 5, 6)];
    let mut dst = vec![Bgra::default(); 2];
    flip_vertical_into(
        &Surface::from_pixels(&src, 1, 2, 1).unwrap(),
        &mut SurfaceMut::from_pixels(&mut dst, 1, 2, 1).unwrap(),
    );
    assert_eq!(dst[0], Bgra { b: 6, g: 5, r: 4, a: u16::MAX });
}

#[cfg(feature = "imgref")]
#[test]
fn readme_imgref() {
    use ::imgref::ImgVec;
    use rgb::Rgba;

    let mut img = ImgVec::new(vec![Rgba::new(0u8, 0, 0, 255); 640 * 480], 640, 480);
    img.buf_mut()[0] = Rgba::new(1, 2, 3, 4);
    zenflip::img::flip_vertical(img.as_mut()).unwrap();
    assert_eq!(img.buf()[640 * 479], Rgba::new(1, 2, 3, 4));
}
