//! Overlay demo application
//!
//! Drives the debug-draw system through a headless fixed-timestep frame
//! loop against the recording backend, exercising every primitive family:
//! depth-tested markers, x-ray highlights, wireframe volumes, billboarded
//! labels, and a HUD built from screen-space shapes, text, and an animated
//! sprite quad.

use scrawl_engine::prelude::*;

struct DemoApp {
    config: AppConfig,
    debug: DebugRenderContext,
    backend: RecordingBackend,
    camera: Camera,
    clock: FrameClock,
    blip_sheet: SpriteSheet,
    blip_anim: SpriteAnimDefinition,
}

impl DemoApp {
    fn new() -> Result<Self, ConfigError> {
        let config = load_config()?;
        log::info!(
            "overlay demo: {} frames at {}s per frame",
            config.frame.frame_count,
            config.frame.fixed_delta_seconds
        );

        let mut textures = TextureRegistry::new();
        let font_texture = textures.register("debug_font_16x16", 256, 256);
        let blip_texture = textures.register("radar_blip_sheet", 128, 32);

        let font = BitmapFont::new(SpriteSheet::new(font_texture, 16, 16));
        let debug = DebugRenderContext::startup(config.debug_render.clone(), font);

        // 4-frame blip animation laid out in a single row
        let blip_sheet = SpriteSheet::new(blip_texture, 4, 1);
        let blip_anim = SpriteAnimDefinition::from_range(0, 3, 1.0, PlaybackMode::PingPong);

        let mut camera = Camera::perspective(Vec3::new(0.0, 3.0, 10.0), 60.0, 2.0, 0.1, 100.0);
        camera.look_at(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0));

        Ok(Self {
            config,
            debug,
            backend: RecordingBackend::new(),
            camera,
            clock: FrameClock::new(),
            blip_sheet,
            blip_anim,
        })
    }

    /// Long-lived markers added once at startup
    fn seed_scene(&mut self) {
        let hold = ColorFade::constant(Rgba::new(0.3, 0.9, 0.3, 1.0));
        let forever = 1.0e9;

        // World origin basis and floor extent
        self.debug.add_world_basis(&Mat4::identity(), forever, DebugRenderMode::UseDepth);
        self.debug.add_world_wire_box(
            Vec3::new(-8.0, 0.0, -8.0),
            Vec3::new(8.0, 0.1, 8.0),
            forever,
            hold,
            DebugRenderMode::UseDepth,
        );

        // Patrol route: fading waypoint line with endpoint colors
        self.debug.add_world_line(
            Vec3::new(-6.0, 0.5, -2.0),
            Vec3::new(6.0, 0.5, 3.0),
            0.05,
            forever,
            ColorFade::constant(Rgba::YELLOW),
            ColorFade::constant(Rgba::RED),
            DebugRenderMode::UseDepth,
        );

        // Objective marker visible through walls
        self.debug.add_world_wire_sphere(
            Vec3::new(4.0, 1.0, -3.0),
            1.2,
            forever,
            ColorFade::constant(Rgba::new(0.2, 0.6, 1.0, 1.0)),
            DebugRenderMode::XRay,
        );
        self.debug.add_world_billboard_text(
            "objective",
            Vec3::new(4.0, 2.5, -3.0),
            0.4,
            Vec2::new(0.5, 0.5),
            forever,
            ColorFade::constant(Rgba::WHITE),
            DebugRenderMode::Always,
        );
    }

    /// Transient adds issued every frame
    fn add_frame_overlays(&mut self) {
        let t = self.clock.total_seconds();

        // Moving probe point with a half-second trail
        let probe = Vec3::new(5.0 * t.cos(), 1.0, 5.0 * t.sin());
        self.debug.add_world_point(
            probe,
            0.1,
            0.5,
            ColorFade::new(Rgba::WHITE, Rgba::new(1.0, 1.0, 1.0, 0.0)),
            DebugRenderMode::UseDepth,
        );

        // X-ray arrow from origin toward the probe
        self.debug.add_world_arrow(
            Vec3::new(0.0, 0.5, 0.0),
            probe,
            0.05,
            0.0,
            ColorFade::constant(Rgba::new(1.0, 0.5, 0.0, 1.0)),
            ColorFade::constant(Rgba::RED),
            DebugRenderMode::XRay,
        );

        // HUD: frame readout, crosshair lines, animated radar blip
        self.debug.add_screen_text(
            &format!("frame {:>4}  t {:>6.2}s", self.clock.frame_count(), t),
            Vec2::new(8.0, 8.0),
            16.0,
            Vec2::zeros(),
            0.0,
            ColorFade::constant(Rgba::WHITE),
        );

        let bounds = self.debug.screen_bounds();
        let mid = bounds.center();
        self.debug.add_screen_line(
            mid - Vec2::new(12.0, 0.0),
            mid + Vec2::new(12.0, 0.0),
            2.0,
            0.0,
            ColorFade::constant(Rgba::GREEN),
            ColorFade::constant(Rgba::GREEN),
        );
        self.debug.add_screen_line(
            mid - Vec2::new(0.0, 12.0),
            mid + Vec2::new(0.0, 12.0),
            2.0,
            0.0,
            ColorFade::constant(Rgba::GREEN),
            ColorFade::constant(Rgba::GREEN),
        );

        let blip = self.blip_anim.sprite_at(&self.blip_sheet, t);
        self.debug.add_screen_textured_quad(
            self.blip_sheet.texture(),
            Vec2::new(bounds.max.x - 72.0, 8.0),
            Vec2::new(bounds.max.x - 8.0, 72.0),
            [blip.uv_min, blip.uv_max],
            0.0,
            ColorFade::constant(Rgba::WHITE),
        );
    }

    fn run(&mut self) -> Result<(), RenderError> {
        self.seed_scene();

        let target = ScreenTarget { texture: None, width: 1600, height: 800 };
        let delta = self.config.frame.fixed_delta_seconds;

        for _ in 0..self.config.frame.frame_count {
            self.clock.tick_fixed(delta);

            // Orbit the camera slowly around the scene
            let angle = self.clock.total_seconds() * 0.3;
            self.camera.set_position(Vec3::new(10.0 * angle.cos(), 3.0, 10.0 * angle.sin()));
            self.camera.look_at(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0));

            self.debug.begin_frame();
            self.add_frame_overlays();
            self.debug.update(self.clock.delta_seconds());
            self.debug.render_world(&self.camera, &mut self.backend)?;
            self.debug.render_screen(&target, &mut self.backend)?;
            self.debug.end_frame();

            if self.clock.frame_count() % 60 == 0 {
                log::info!(
                    "frame {:>4}: {} live objects, {} draw calls",
                    self.clock.frame_count(),
                    self.debug.object_count(),
                    self.backend.draw_count()
                );
            }
            self.backend.clear();
        }

        Ok(())
    }
}

fn load_config() -> Result<AppConfig, ConfigError> {
    // Support running from the workspace root or the app directory
    for candidate in ["config.toml", "overlay_app/config.toml"] {
        if std::path::Path::new(candidate).exists() {
            return AppConfig::load_from_path(candidate);
        }
    }
    Ok(AppConfig::default())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut app = DemoApp::new()?;
    app.run()?;
    app.debug.shutdown();

    log::info!("overlay demo finished");
    Ok(())
}
