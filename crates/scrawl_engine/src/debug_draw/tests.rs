//! Frame-loop tests spanning the registry, batching, and screen passes

use crate::foundation::color::{ColorFade, Rgba};
use crate::foundation::math::{Mat4, Vec2, Vec3};
use crate::render::api::{
    CullMode, DepthTest, PolygonMode, RecordingBackend, TextureRegistry,
};
use crate::render::primitives::{builders, Camera};
use crate::render::systems::text::BitmapFont;
use crate::sprite::SpriteSheet;

use super::context::DebugRenderContext;
use super::object::{DebugFillMode, DebugObject, DebugRenderMode};
use super::screen::ScreenTarget;
use super::DebugRenderConfig;

fn test_context() -> (DebugRenderContext, TextureRegistry) {
    let mut registry = TextureRegistry::new();
    let font_texture = registry.register("debug_font", 256, 256);
    let font = BitmapFont::new(SpriteSheet::new(font_texture, 16, 16));
    let context = DebugRenderContext::startup(DebugRenderConfig::default(), font);
    (context, registry)
}

fn world_camera() -> Camera {
    let mut camera = Camera::perspective(Vec3::new(0.0, 2.0, 8.0), 60.0, 16.0 / 9.0, 0.1, 100.0);
    camera.look_at(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0));
    camera
}

fn default_target() -> ScreenTarget {
    ScreenTarget { texture: None, width: 1600, height: 800 }
}

#[test]
fn test_every_add_op_queues_one_object() {
    let (mut context, mut registry) = test_context();
    let fade = ColorFade::constant(Rgba::WHITE);
    let quad_texture = registry.register("noise", 64, 64);

    context.add_world_point(Vec3::zeros(), 0.2, 1.0, fade, DebugRenderMode::UseDepth);
    context.add_world_line(
        Vec3::zeros(),
        Vec3::new(1.0, 0.0, 0.0),
        0.05,
        1.0,
        fade,
        fade,
        DebugRenderMode::UseDepth,
    );
    context.add_world_arrow(
        Vec3::zeros(),
        Vec3::new(0.0, 1.0, 0.0),
        0.05,
        1.0,
        fade,
        fade,
        DebugRenderMode::XRay,
    );
    context.add_world_quad(
        [
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-1.0, 1.0, 0.0),
        ],
        1.0,
        fade,
        DebugRenderMode::Always,
    );
    context.add_world_wire_box(
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
        1.0,
        fade,
        DebugRenderMode::UseDepth,
    );
    context.add_world_wire_sphere(Vec3::zeros(), 1.0, 1.0, fade, DebugRenderMode::UseDepth);
    context.add_world_basis(&Mat4::identity(), 1.0, DebugRenderMode::UseDepth);
    context.add_world_text(
        "hp 75",
        &Mat4::identity(),
        0.25,
        Vec2::new(0.5, 0.5),
        1.0,
        fade,
        DebugRenderMode::UseDepth,
    );
    context.add_world_billboard_text(
        "enemy",
        Vec3::new(0.0, 2.0, 0.0),
        0.25,
        Vec2::new(0.5, 0.5),
        1.0,
        fade,
        DebugRenderMode::Always,
    );
    assert_eq!(context.world_object_count(), 9);

    context.add_screen_point(Vec2::new(10.0, 10.0), 4.0, 1.0, fade);
    context.add_screen_line(Vec2::zeros(), Vec2::new(100.0, 0.0), 2.0, 1.0, fade, fade);
    context.add_screen_arrow(Vec2::zeros(), Vec2::new(0.0, 100.0), 2.0, 1.0, fade, fade);
    context.add_screen_quad(Vec2::zeros(), Vec2::new(50.0, 50.0), 1.0, fade);
    context.add_screen_textured_quad(
        quad_texture,
        Vec2::new(100.0, 100.0),
        Vec2::new(200.0, 200.0),
        [Vec2::zeros(), Vec2::new(1.0, 1.0)],
        1.0,
        fade,
    );
    context.add_screen_text("fps 60", Vec2::new(8.0, 8.0), 16.0, Vec2::zeros(), 1.0, fade);
    context.add_screen_basis(
        Vec2::new(400.0, 400.0),
        Vec2::new(50.0, 0.0),
        Vec2::new(0.0, 50.0),
        2.0,
        1.0,
    );
    assert_eq!(context.screen_object_count(), 7);
}

#[test]
fn test_disabled_world_pass_issues_no_draws_but_objects_still_expire() {
    let (mut context, _registry) = test_context();
    let mut backend = RecordingBackend::new();

    context.add_world_point(
        Vec3::zeros(),
        0.2,
        1.0,
        ColorFade::constant(Rgba::RED),
        DebugRenderMode::UseDepth,
    );
    context.set_enabled(false);

    context.render_world(&world_camera(), &mut backend).unwrap();
    assert_eq!(backend.draw_count(), 0);

    // Aging is independent of the enabled flag: the object expires while
    // rendering is suppressed
    context.update(2.0);
    context.end_frame();
    assert_eq!(context.world_object_count(), 0);
}

#[test]
fn test_sweep_removes_all_and_only_expired_objects() {
    let (mut context, _registry) = test_context();
    let fade = ColorFade::constant(Rgba::GREEN);

    context.add_world_point(Vec3::zeros(), 0.2, 1.0, fade, DebugRenderMode::UseDepth);
    context.add_world_point(Vec3::zeros(), 0.2, 5.0, fade, DebugRenderMode::UseDepth);
    context.add_world_point(Vec3::zeros(), 0.2, 0.5, fade, DebugRenderMode::UseDepth);

    let survivor_geometry = context.world_objects[1].mesh().clone();

    context.update(2.0);
    context.end_frame();

    assert_eq!(context.world_object_count(), 1);
    let survivor = &context.world_objects[0];
    assert!(survivor.remaining_lifetime() > 0.0);
    // The surviving object's geometry is untouched by the sweep
    assert_eq!(survivor.mesh(), &survivor_geometry);
}

#[test]
fn test_consecutive_expired_objects_are_both_removed() {
    // Regression guard for index-compaction bugs: adjacent expired entries
    // must not survive a sweep
    let (mut context, _registry) = test_context();
    let fade = ColorFade::constant(Rgba::WHITE);

    for duration in [0.1, 0.1, 0.1, 9.0, 0.1, 0.1] {
        context.add_world_point(Vec3::zeros(), 0.2, duration, fade, DebugRenderMode::UseDepth);
    }
    context.update(1.0);
    context.end_frame();
    assert_eq!(context.world_object_count(), 1);
}

#[test]
fn test_degenerate_bucket_is_skipped_and_minimal_bucket_draws_once() {
    let (mut context, _registry) = test_context();
    let mut backend = RecordingBackend::new();

    // Hand-build an object with only 2 indices: nothing to rasterize
    let mut degenerate = builders::point_cube(Vec3::zeros(), 0.1);
    degenerate.mesh.indices.truncate(2);
    context.world_objects.push(DebugObject::new(
        degenerate,
        &[ColorFade::constant(Rgba::WHITE)],
        DebugRenderMode::UseDepth,
        DebugFillMode::Normal,
        1.0,
    ));

    context.render_world(&world_camera(), &mut backend).unwrap();
    assert_eq!(backend.draw_count(), 0);

    // Exactly 3 indices is the smallest drawable bucket
    let mut triangle = builders::point_cube(Vec3::zeros(), 0.1);
    triangle.mesh.indices.truncate(3);
    context.world_objects.clear();
    context.world_objects.push(DebugObject::new(
        triangle,
        &[ColorFade::constant(Rgba::WHITE)],
        DebugRenderMode::UseDepth,
        DebugFillMode::Normal,
        1.0,
    ));

    backend.clear();
    context.render_world(&world_camera(), &mut backend).unwrap();
    assert_eq!(backend.draw_count(), 1);
}

#[test]
fn test_same_bucket_objects_merge_into_one_draw() {
    let (mut context, _registry) = test_context();
    let mut backend = RecordingBackend::new();
    let fade = ColorFade::constant(Rgba::BLUE);

    context.add_world_point(Vec3::zeros(), 0.2, 1.0, fade, DebugRenderMode::UseDepth);
    context.add_world_point(Vec3::new(1.0, 0.0, 0.0), 0.2, 1.0, fade, DebugRenderMode::UseDepth);
    context.add_world_point(Vec3::new(2.0, 0.0, 0.0), 0.2, 1.0, fade, DebugRenderMode::UseDepth);

    context.render_world(&world_camera(), &mut backend).unwrap();

    assert_eq!(backend.draw_count(), 1);
    // 3 cubes x 36 indices merged into one index buffer
    assert_eq!(backend.draws()[0].index_count, 108);
    assert_eq!(backend.draws()[0].cull_mode, CullMode::Back);
    assert_eq!(backend.draws()[0].depth_test, DepthTest::LessEqual);
    assert!(backend.draws()[0].depth_write);
}

#[test]
fn test_distinct_buckets_draw_separately_with_their_state() {
    let (mut context, _registry) = test_context();
    let mut backend = RecordingBackend::new();
    let fade = ColorFade::constant(Rgba::WHITE);

    context.add_world_point(Vec3::zeros(), 0.2, 1.0, fade, DebugRenderMode::Always);
    context.add_world_wire_sphere(Vec3::zeros(), 1.0, 1.0, fade, DebugRenderMode::UseDepth);

    context.render_world(&world_camera(), &mut backend).unwrap();
    assert_eq!(backend.draw_count(), 2);

    // Always/Normal bucket walks first: no cull, always-pass depth, no write
    let always_draw = &backend.draws()[0];
    assert_eq!(always_draw.polygon_mode, PolygonMode::Fill);
    assert_eq!(always_draw.cull_mode, CullMode::None);
    assert_eq!(always_draw.depth_test, DepthTest::Always);
    assert!(!always_draw.depth_write);

    // UseDepth/Wireframe bucket: wireframe fill, no cull, depth-tested
    let wire_draw = &backend.draws()[1];
    assert_eq!(wire_draw.polygon_mode, PolygonMode::Wireframe);
    assert_eq!(wire_draw.cull_mode, CullMode::None);
    assert_eq!(wire_draw.depth_test, DepthTest::LessEqual);
}

#[test]
fn test_xray_bucket_draws_twice_gray_then_full() {
    let (mut context, _registry) = test_context();
    let mut backend = RecordingBackend::new();

    context.add_world_point(
        Vec3::zeros(),
        0.2,
        1.0,
        ColorFade::constant(Rgba::YELLOW),
        DebugRenderMode::XRay,
    );
    context.render_world(&world_camera(), &mut backend).unwrap();

    assert_eq!(backend.draw_count(), 2);

    let occluded = &backend.draws()[0];
    assert_eq!(occluded.depth_test, DepthTest::GreaterEqual);
    assert!(!occluded.depth_write);
    assert_eq!(occluded.tint, Rgba::XRAY_GRAY);

    let visible = &backend.draws()[1];
    assert_eq!(visible.depth_test, DepthTest::LessEqual);
    assert!(visible.depth_write);
    assert_eq!(visible.tint, Rgba::WHITE);

    // Both passes submit the same merged bucket
    assert_eq!(occluded.index_count, visible.index_count);
}

#[test]
fn test_world_text_binds_shared_atlas() {
    let (mut context, _registry) = test_context();
    let mut backend = RecordingBackend::new();
    let atlas = context.font().texture();

    context.add_world_text(
        "label",
        &Mat4::identity(),
        0.25,
        Vec2::new(0.5, 0.5),
        1.0,
        ColorFade::constant(Rgba::WHITE),
        DebugRenderMode::UseDepth,
    );
    context.render_world(&world_camera(), &mut backend).unwrap();

    assert_eq!(backend.draw_count(), 1);
    assert_eq!(backend.draws()[0].texture, Some(atlas));
    assert_eq!(backend.draws()[0].polygon_mode, PolygonMode::Fill);
}

#[test]
fn test_billboard_render_never_mutates_stored_geometry() {
    let (mut context, _registry) = test_context();
    let mut backend = RecordingBackend::new();

    context.add_world_billboard_text(
        "tag",
        Vec3::new(0.0, 2.0, 0.0),
        0.25,
        Vec2::new(0.5, 0.5),
        10.0,
        ColorFade::constant(Rgba::WHITE),
        DebugRenderMode::Always,
    );
    let stored_before = context.world_objects[0].mesh().clone();

    let camera = world_camera();
    context.render_world(&camera, &mut backend).unwrap();
    context.render_world(&camera, &mut backend).unwrap();

    // Two frames, unchanged camera: stored origin-local geometry untouched
    assert_eq!(context.world_objects[0].mesh(), &stored_before);
    assert_eq!(backend.draw_count(), 2);
    assert_eq!(backend.draws()[0].index_count, backend.draws()[1].index_count);
}

#[test]
fn test_screen_pass_batches_white_font_and_per_texture_draws() {
    let (mut context, mut registry) = test_context();
    let mut backend = RecordingBackend::new();
    let fade = ColorFade::constant(Rgba::WHITE);
    let atlas = context.font().texture();
    let portrait = registry.register("portrait", 128, 128);
    let minimap = registry.register("minimap", 256, 256);

    // Two plain shapes -> one white batch
    context.add_screen_quad(Vec2::zeros(), Vec2::new(50.0, 50.0), 1.0, fade);
    context.add_screen_point(Vec2::new(100.0, 100.0), 4.0, 1.0, fade);
    // Two text blocks -> one font batch
    context.add_screen_text("fps 60", Vec2::new(8.0, 8.0), 16.0, Vec2::zeros(), 1.0, fade);
    context.add_screen_text("ammo 12", Vec2::new(8.0, 32.0), 16.0, Vec2::zeros(), 1.0, fade);
    // Two textured quads -> one draw each
    let full = [Vec2::zeros(), Vec2::new(1.0, 1.0)];
    context.add_screen_textured_quad(portrait, Vec2::zeros(), Vec2::new(64.0, 64.0), full, 1.0, fade);
    context.add_screen_textured_quad(minimap, Vec2::new(64.0, 0.0), Vec2::new(128.0, 64.0), full, 1.0, fade);

    context.render_screen(&default_target(), &mut backend).unwrap();

    assert_eq!(backend.draw_count(), 4);
    assert_eq!(backend.draws()[0].texture, None);
    assert_eq!(backend.draws()[1].texture, Some(atlas));
    assert_eq!(backend.draws()[2].texture, Some(portrait));
    assert_eq!(backend.draws()[3].texture, Some(minimap));

    // Screen-space draws ignore depth
    for draw in backend.draws() {
        assert_eq!(draw.depth_test, DepthTest::Always);
        assert!(!draw.depth_write);
    }
}

#[test]
fn test_screen_pass_renders_into_requested_target() {
    let (mut context, mut registry) = test_context();
    let mut backend = RecordingBackend::new();
    let offscreen = registry.register("offscreen", 512, 256);

    context.add_screen_quad(
        Vec2::zeros(),
        Vec2::new(10.0, 10.0),
        1.0,
        ColorFade::constant(Rgba::RED),
    );
    let target = ScreenTarget { texture: Some(offscreen), width: 512, height: 256 };
    context.render_screen(&target, &mut backend).unwrap();

    assert_eq!(backend.draw_count(), 1);
    assert_eq!(backend.draws()[0].render_target, Some(offscreen));
}

#[test]
fn test_screen_geometry_is_recentered_at_add_time() {
    let (mut context, _registry) = test_context();

    // Default bounds: 800 high, aspect 2.0 -> 1600 x 800, midpoint (800, 400)
    context.add_screen_quad(
        Vec2::zeros(),
        Vec2::new(10.0, 10.0),
        1.0,
        ColorFade::constant(Rgba::WHITE),
    );

    let mesh = context.screen_objects[0].mesh();
    assert_eq!(mesh.vertices[0].position[0], -800.0);
    assert_eq!(mesh.vertices[0].position[1], -400.0);
    assert_eq!(mesh.vertices[2].position[0], -790.0);
    assert_eq!(mesh.vertices[2].position[1], -390.0);
}

#[test]
fn test_screen_pass_tracks_target_aspect_for_later_adds() {
    let (mut context, _registry) = test_context();
    let mut backend = RecordingBackend::new();

    let square = ScreenTarget { texture: None, width: 800, height: 800 };
    context.render_screen(&square, &mut backend).unwrap();

    // Bounds now derive from the square target: 800 x 800
    let bounds = context.screen_bounds();
    assert_eq!(bounds.max.x, 800.0);
    assert_eq!(bounds.max.y, 800.0);
}

#[test]
fn test_textured_quad_carries_sprite_sheet_uvs() {
    let (mut context, mut registry) = test_context();
    let sheet_texture = registry.register("blips", 128, 32);
    let sheet = SpriteSheet::new(sheet_texture, 4, 1);

    // Third cell of a 4x1 sheet spans u in [0.5, 0.75]
    let sprite = sheet.sprite(2);
    context.add_screen_textured_quad(
        sheet.texture(),
        Vec2::zeros(),
        Vec2::new(32.0, 32.0),
        [sprite.uv_min, sprite.uv_max],
        1.0,
        ColorFade::constant(Rgba::WHITE),
    );

    let mesh = context.screen_textured_objects[0].mesh();
    assert_eq!(mesh.vertices[0].uv, [0.5, 0.0]);
    assert_eq!(mesh.vertices[2].uv, [0.75, 1.0]);
}

#[test]
fn test_update_ages_every_collection() {
    let (mut context, mut registry) = test_context();
    let fade = ColorFade::constant(Rgba::WHITE);
    let texture = registry.register("icon", 32, 32);

    context.add_world_point(Vec3::zeros(), 0.2, 1.0, fade, DebugRenderMode::UseDepth);
    context.add_screen_quad(Vec2::zeros(), Vec2::new(10.0, 10.0), 1.0, fade);
    context.add_screen_textured_quad(
        texture,
        Vec2::zeros(),
        Vec2::new(10.0, 10.0),
        [Vec2::zeros(), Vec2::new(1.0, 1.0)],
        1.0,
        fade,
    );

    context.update(0.25);

    assert_eq!(context.world_objects[0].remaining_lifetime(), 0.75);
    assert_eq!(context.screen_objects[0].remaining_lifetime(), 0.75);
    assert_eq!(context.screen_textured_objects[0].remaining_lifetime(), 0.75);
}

#[test]
fn test_zero_duration_object_survives_exactly_one_frame() {
    let (mut context, _registry) = test_context();
    let mut backend = RecordingBackend::new();

    context.begin_frame();
    context.add_world_point(
        Vec3::zeros(),
        0.2,
        0.0,
        ColorFade::constant(Rgba::WHITE),
        DebugRenderMode::UseDepth,
    );
    context.update(1.0 / 60.0);
    context.render_world(&world_camera(), &mut backend).unwrap();
    context.end_frame();

    // Drawn the frame it expired, gone afterward
    assert_eq!(backend.draw_count(), 1);
    assert_eq!(context.world_object_count(), 0);

    backend.clear();
    context.render_world(&world_camera(), &mut backend).unwrap();
    assert_eq!(backend.draw_count(), 0);
}
