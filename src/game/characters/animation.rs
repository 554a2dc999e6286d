// Fighter animation system
//
// Stands in for the animator the state machine talks to: named clips,
// boolean flags and fire-once triggers. Flags and triggers drive the
// locomotion clips; attacks and hit reactions play their clips directly.

use crate::engine::game_loop::TICKS_PER_SECOND;
use crate::game::combat::Moveset;
use log::trace;
use std::collections::HashMap;

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Name of the animation (e.g., "Idle", "Walk", "5P")
    pub name: String,
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    /// Create a new animation clip
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count,
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    /// Create a looping animation
    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    /// Create a one-shot animation (plays once)
    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }
}

/// Manages animation playback for a fighter
#[derive(Debug)]
pub struct AnimationPlayer {
    /// All available animations
    animations: HashMap<String, AnimationClip>,
    /// Currently playing animation name
    current_animation: String,
    /// Current frame index
    current_frame: usize,
    /// Time elapsed in current frame
    frame_timer: f32,
    /// Whether the animation is playing
    playing: bool,
    /// Playback speed multiplier (1.0 = normal)
    playback_speed: f32,
    /// Whether the sprite should be flipped horizontally
    flip_horizontal: bool,
    /// Animator flags set by the states
    flags: HashMap<String, bool>,
    /// Triggers fired since the last update
    pending_triggers: Vec<String>,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
            current_animation: String::new(),
            current_frame: 0,
            frame_timer: 0.0,
            playing: true,
            playback_speed: 1.0,
            flip_horizontal: false,
            flags: HashMap::new(),
            pending_triggers: Vec::new(),
        }
    }

    /// Create an animation player with the locomotion clips and one clip per move
    ///
    /// Move clips run at the simulation rate, one animation frame per move frame.
    pub fn with_fighter_animations(moveset: &Moveset) -> Self {
        let mut player = Self::new();

        player.add_animation(AnimationClip::looping("Idle", 8, 10.0));
        player.add_animation(AnimationClip::looping("Walk", 8, 12.0));
        player.add_animation(AnimationClip::looping("Jump", 4, 10.0));
        player.add_animation(AnimationClip::looping("Fall", 4, 10.0));
        player.add_animation(AnimationClip::one_shot("HitStun", 6, 12.0));

        for definition in moveset.moves() {
            player.add_animation(AnimationClip::one_shot(
                &definition.animation,
                definition.total_frames() as usize,
                TICKS_PER_SECOND as f32,
            ));
        }

        // Start with idle
        player.play("Idle");

        player
    }

    /// Add an animation clip
    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    /// Play an animation by name
    pub fn play(&mut self, name: &str) {
        if self.current_animation != name {
            self.play_from_start(name);
        }
    }

    /// Play an animation from the beginning, even if it's the same
    pub fn play_from_start(&mut self, name: &str) {
        self.current_animation = name.to_string();
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.playing = true;
    }

    /// Pause the current animation
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Resume the current animation
    pub fn resume(&mut self) {
        self.playing = true;
    }

    /// Set playback speed (1.0 = normal, 2.0 = double speed)
    pub fn set_playback_speed(&mut self, speed: f32) {
        self.playback_speed = speed.max(0.0);
    }

    /// Set horizontal flip state
    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    /// Get horizontal flip state
    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    pub fn set_flag(&mut self, name: &str, value: bool) {
        self.flags.insert(name.to_string(), value);
    }

    /// Value of an animator flag, false if never set
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Fire a trigger; it is consumed on the next update
    pub fn set_trigger(&mut self, name: &str) {
        self.pending_triggers.push(name.to_string());
    }

    pub fn pending_triggers(&self) -> &[String] {
        &self.pending_triggers
    }

    /// Update the animation (called every tick)
    pub fn update(&mut self, dt: f32) {
        self.resolve_triggers();
        self.resolve_locomotion();

        if !self.playing {
            return;
        }

        let Some(clip) = self.animations.get(&self.current_animation) else {
            return;
        };

        self.frame_timer += dt * self.playback_speed;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    // Stay on last frame
                    self.current_frame = clip.frame_count.saturating_sub(1);
                    self.playing = false;
                    break;
                }
            }
        }
    }

    fn resolve_triggers(&mut self) {
        for trigger in std::mem::take(&mut self.pending_triggers) {
            match trigger.as_str() {
                "Jump" => self.play_from_start("Jump"),
                "Land" => self.play("Idle"),
                other => trace!("Unhandled animator trigger '{}'", other),
            }
        }
    }

    /// Switch between locomotion clips from the flags; one-shot clips are left alone
    fn resolve_locomotion(&mut self) {
        let looping = self.current_clip().map_or(true, |clip| clip.looping);
        if !looping {
            return;
        }

        if self.flag("IsFalling") {
            self.play("Fall");
        } else if self.flag("WalkForward") || self.flag("WalkBackward") {
            self.play("Walk");
        } else if self.current_animation == "Walk" || self.current_animation == "Fall" {
            self.play("Idle");
        }
    }

    /// Get the current animation name
    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    /// Get the current frame index
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Check if the animation is playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Check if the current animation has finished (for non-looping animations)
    pub fn is_finished(&self) -> bool {
        match self.current_clip() {
            Some(clip) => !clip.looping && !self.playing,
            None => true,
        }
    }

    /// Get the clip info for the current animation
    pub fn current_clip(&self) -> Option<&AnimationClip> {
        self.animations.get(&self.current_animation)
    }

    /// Length of the playing clip in seconds
    pub fn current_clip_length(&self) -> Option<f32> {
        self.current_clip().map(AnimationClip::total_duration)
    }
}
