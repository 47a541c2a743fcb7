use crate::{
    animation::AnimationState,
    config::SceneConfig,
    constants::{AMBIENT_INTENSITY, DIRECTIONAL_INTENSITY, DIRECTIONAL_POSITION},
    fullscreen::Fullscreen,
    input::DoubleClickDetector,
    layout::SceneLayout,
    palette::sample_pastels,
    shapes::ShapeKind,
    viewport::ViewportState,
};
use log::{info, warn};
use nalgebra::Vector2;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashMap;
use three_d::{
    AmbientLight, ClearState, CpuMaterial, CpuMesh, DirectionalLight, Event, FrameOutput, Gm,
    Light, Mesh, MouseButton, PhysicalMaterial, Srgba, Window, WindowSettings, vec3,
};

/// Counts frames against render loop time, so it works the same in a browser.
pub struct FpsTimer {
    pub elapsed_ms: f64,
    pub frame: u64,
}

impl FpsTimer {
    pub fn new() -> Self {
        Self {
            elapsed_ms: 0.0,
            frame: 0,
        }
    }

    /// dt_ms: duration of the last frame
    pub fn tick(&mut self, dt_ms: f64) {
        self.frame += 1;
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= 1000.0 {
            log::trace!("FPS: {:.2}", self.frame as f64 / (self.elapsed_ms / 1000.0));
            self.elapsed_ms = 0.0;
            self.frame = 0;
        }
    }
}

pub struct RenderLoop {
    pub config: SceneConfig,
    pub seed: u64,
    pub layout: SceneLayout,
    pub palette: Vec<Srgba>,
    pub animation: AnimationState,
}

impl RenderLoop {
    /// Executed at start. Everything here is CPU side, GPU resources are created in `run`.
    pub fn initialize(config: SceneConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        info!("Scene seed: {} (pass it back with --seed to get this scene again)", seed);
        let mut rng = StdRng::seed_from_u64(seed);

        let palette = sample_pastels(&mut rng, config.palette_size);
        let layout = SceneLayout::generate(&config, &mut rng)?;
        let animation = AnimationState::new(&config);

        Ok(Self {
            config,
            seed,
            layout,
            palette,
            animation,
        })
    }

    /// One mesh per distinct shape, reused for every object of that shape.
    pub fn cpu_meshes(&self) -> HashMap<ShapeKind, CpuMesh> {
        let mut meshes = HashMap::new();
        for placement in self.layout.placements.iter() {
            meshes
                .entry(placement.shape)
                .or_insert_with(|| placement.shape.cpu_mesh());
        }
        meshes
    }

    pub fn run<F: Fullscreen + 'static>(
        mut self,
        settings: WindowSettings,
        mut fullscreen: F,
    ) -> anyhow::Result<()> {
        let window = Window::new(settings)
            .map_err(|e| anyhow::anyhow!("Failed to create window: {}", e))?;
        let context = window.gl();

        info!("Moving {} meshes to GPU...", self.layout.placements.len());
        let cpu_meshes = self.cpu_meshes();
        let materials: Vec<PhysicalMaterial> = self
            .palette
            .iter()
            .map(|&albedo| {
                PhysicalMaterial::new_opaque(
                    &context,
                    &CpuMaterial {
                        albedo,
                        metallic: 0.0,
                        roughness: 0.6,
                        ..Default::default()
                    },
                )
            })
            .collect();

        let mut objects: Vec<Gm<Mesh, PhysicalMaterial>> = self
            .layout
            .placements
            .iter()
            .map(|p| {
                Gm::new(
                    Mesh::new(&context, &cpu_meshes[&p.shape]),
                    materials[p.material].clone(),
                )
            })
            .collect();

        info!("Setting up lights and camera...");
        let ambient = AmbientLight::new(&context, AMBIENT_INTENSITY, Srgba::WHITE);
        // points from its position towards the origin
        let [x, y, z] = DIRECTIONAL_POSITION;
        let directional =
            DirectionalLight::new(&context, DIRECTIONAL_INTENSITY, Srgba::WHITE, vec3(-x, -y, -z));

        let mut viewport =
            ViewportState::new(window.viewport(), window.device_pixel_ratio() as f32);
        let mut camera = viewport.camera(self.animation.camera_z as f32);

        let mut double_click = DoubleClickDetector::default();
        let mut timer = FpsTimer::new();

        window.render_loop(move |frame_input| {
            // render loop start
            let resized =
                viewport.update(frame_input.viewport, frame_input.device_pixel_ratio as f32);

            for event in frame_input.events.iter() {
                if let Event::MousePress {
                    button: MouseButton::Left,
                    position,
                    ..
                } = *event
                {
                    let pos = Vector2::new(position.x, position.y);
                    if double_click.press(frame_input.accumulated_time, pos) {
                        if let Err(e) = fullscreen.toggle() {
                            warn!("Fullscreen toggle failed: {}", e);
                        }
                    }
                }
            }

            self.animation.advance();
            if resized || self.animation.is_dollying() {
                viewport.sync_camera(&mut camera, self.animation.camera_z as f32);
            }

            for (object, placement) in objects.iter_mut().zip(self.layout.placements.iter()) {
                object.set_transformation(self.animation.world_transform(placement));
            }

            let lights: [&dyn Light; 2] = [&ambient, &directional];
            frame_input
                .screen()
                .clear(ClearState::color_and_depth(0.0, 0.0, 0.0, 1.0, 1.0))
                .render(&camera, objects.iter(), &lights);

            timer.tick(frame_input.elapsed_time);

            FrameOutput::default()
        });

        Ok(())
    }
}
