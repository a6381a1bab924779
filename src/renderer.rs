use crate::camera::Camera;
use crate::error::*;
use crate::image::*;
use crate::manager::*;
use crate::world::World;
use crate::*;

use log::*;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::{self, SyncSender};
use std::sync::{Arc, Mutex};
use std::time::Instant;

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub nthread: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            nthread: num_cpus::get(),
        }
    }
}

type RowResult = Result<(usize, Vec<RGB>)>;

/// Renders scanlines on worker threads. The calling thread owns the image
/// and is the only writer.
pub struct Renderer {
    config: RenderConfig,
    cancel: Arc<AtomicBool>,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Renderer {
            config,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Setting the flag stops the render before the next scanline.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    pub fn render(&self, scene: Arc<World>, camera: &Camera) -> Result<Image> {
        self.render_with(scene, camera, |_, _| {})
    }

    /// Like `render`, calling `on_row(completed, total)` on the calling
    /// thread after each scanline lands in the image.
    pub fn render_with<F>(&self, scene: Arc<World>, camera: &Camera, mut on_row: F) -> Result<Image>
    where
        F: FnMut(usize, usize),
    {
        use std::thread;
        let nthread = self.config.nthread.max(1);
        let started = Instant::now();
        info!(
            "rendering {}x{} with {} threads",
            camera.hsize(),
            camera.vsize(),
            nthread
        );

        let manager = Arc::new(Mutex::new(Manager::new(
            camera.vsize(),
            self.cancel.clone(),
        )));
        // bounded so workers run at most a few rows ahead of the image
        let (tx, rx) = mpsc::sync_channel::<RowResult>(nthread);
        let mut threads = vec![];
        for i in 0..nthread {
            let camera = camera.clone();
            let scene = scene.clone();
            let manager = manager.clone();
            let tx = tx.clone();
            let thread =
                thread::spawn(move || Self::render_thread(&scene, camera, i, manager, tx));
            threads.push(thread);
        }
        drop(tx);

        let mut image = Image::new(camera.hsize(), camera.vsize());
        let mut completed = 0;
        let mut first_err = None;
        for msg in rx {
            match msg {
                Ok((py, row)) => {
                    for (px, color) in row.into_iter().enumerate() {
                        image.put_pixel(px, py, color);
                    }
                    completed += 1;
                    debug!("scanline {} done ({}/{})", py, completed, camera.vsize());
                    on_row(completed, camera.vsize());
                }
                Err(e) => {
                    Manager::lock(&manager).halt();
                    if first_err.is_none() {
                        error!("render failed: {}", e);
                        first_err = Some(e);
                    }
                }
            }
        }

        let mut panicked = false;
        for thread in threads {
            if thread.join().is_err() {
                panicked = true;
            }
        }

        if let Some(e) = first_err {
            return Err(e);
        }
        if panicked {
            error!("a render thread panicked");
            return Err(Error::WorkerPanicked);
        }
        if completed < camera.vsize() && Manager::lock(&manager).is_cancelled() {
            warn!(
                "render cancelled after {}/{} scanlines",
                completed,
                camera.vsize()
            );
            return Err(Error::Cancelled { completed });
        }
        info!("render finished in {:.2?}", started.elapsed());
        Ok(image)
    }

    fn render_thread(
        scene: &World,
        camera: Camera,
        thread_id: usize,
        manager: Arc<Mutex<Manager>>,
        tx: SyncSender<RowResult>,
    ) {
        loop {
            let py = match Manager::lock(&manager).next() {
                Some(py) => py,
                None => break,
            };
            let result = camera.render_row(scene, py).map(|row| (py, row));
            let failed = result.is_err();
            if tx.send(result).is_err() || failed {
                break;
            }
        }
        debug!("render thread {} exiting", thread_id);
    }
}
