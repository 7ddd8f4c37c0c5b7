//! Síntesis de tonos con WebAudio (wasm). Una réplica de los seis efectos
//! del juego: blip, pop, triada mayor, zumbido, fanfarria y swish.

use super::{FeedbackSink, SoundEvent};
use web_sys::wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

pub struct WebAudioSink;

impl FeedbackSink for WebAudioSink {
    fn emit(&self, event: SoundEvent) {
        if let Err(err) = play(event) {
            log::warn!("audio play failed for {event:?}: {err:?}");
        }
    }
}

fn play(event: SoundEvent) -> Result<(), JsValue> {
    let ctx = AudioContext::new()?;
    let now = ctx.current_time();

    match event {
        // Blip agudo descendente
        SoundEvent::Click => {
            let (osc, gain) = osc_with_gain(&ctx, OscillatorType::Sine)?;
            osc.frequency().set_value_at_time(600.0, now)?;
            osc.frequency()
                .exponential_ramp_to_value_at_time(300.0, now + 0.1)?;
            gain.gain().set_value_at_time(0.2, now)?;
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, now + 0.1)?;
            osc.start_with_when(now)?;
            osc.stop_with_when(now + 0.1)?;
        }

        // Burbuja que sube
        SoundEvent::Pop => {
            let (osc, gain) = osc_with_gain(&ctx, OscillatorType::Triangle)?;
            osc.frequency().set_value_at_time(300.0, now)?;
            osc.frequency()
                .linear_ramp_to_value_at_time(500.0, now + 0.05)?;
            gain.gain().set_value_at_time(0.2, now)?;
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, now + 0.1)?;
            osc.start_with_when(now)?;
            osc.stop_with_when(now + 0.1)?;
        }

        // Triada mayor C5-E5-G5
        SoundEvent::Correct => {
            for (i, freq) in [523.25_f32, 659.25, 783.99].into_iter().enumerate() {
                let offset = i as f64 * 0.05;
                let (osc, gain) = osc_with_gain(&ctx, OscillatorType::Sine)?;
                osc.frequency().set_value(freq);
                gain.gain().set_value_at_time(0.0, now)?;
                gain.gain()
                    .linear_ramp_to_value_at_time(0.15, now + 0.05 + offset)?;
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.001, now + 0.4 + offset)?;
                osc.start_with_when(now + offset)?;
                osc.stop_with_when(now + 0.6 + offset)?;
            }
        }

        // Zumbido grave
        SoundEvent::Wrong => {
            let (osc, gain) = osc_with_gain(&ctx, OscillatorType::Sawtooth)?;
            osc.frequency().set_value_at_time(150.0, now)?;
            osc.frequency()
                .linear_ramp_to_value_at_time(100.0, now + 0.3)?;
            gain.gain().set_value_at_time(0.2, now)?;
            gain.gain().linear_ramp_to_value_at_time(0.01, now + 0.3)?;
            osc.start_with_when(now)?;
            osc.stop_with_when(now + 0.3)?;
        }

        // Fanfarria C5-E5-G5-C6
        SoundEvent::Win => {
            for (i, freq) in [523.25_f32, 659.25, 783.99, 1046.50].into_iter().enumerate() {
                let start = now + i as f64 * 0.1;
                let (osc, gain) = osc_with_gain(&ctx, OscillatorType::Square)?;
                osc.frequency().set_value(freq);
                gain.gain().set_value_at_time(0.0, start)?;
                gain.gain().linear_ramp_to_value_at_time(0.1, start + 0.05)?;
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.001, start + 0.3)?;
                osc.start_with_when(start)?;
                osc.stop_with_when(start + 0.4)?;
            }
        }

        // Swish ascendente
        SoundEvent::LevelSelect => {
            let (osc, gain) = osc_with_gain(&ctx, OscillatorType::Sine)?;
            osc.frequency().set_value_at_time(200.0, now)?;
            osc.frequency()
                .exponential_ramp_to_value_at_time(600.0, now + 0.2)?;
            gain.gain().set_value_at_time(0.1, now)?;
            gain.gain().linear_ramp_to_value_at_time(0.0, now + 0.2)?;
            osc.start_with_when(now)?;
            osc.stop_with_when(now + 0.2)?;
        }
    }

    Ok(())
}

/// Crea un oscilador conectado a un nodo de ganancia, ya enchufado a la salida.
fn osc_with_gain(
    ctx: &AudioContext,
    shape: OscillatorType,
) -> Result<(web_sys::OscillatorNode, web_sys::GainNode), JsValue> {
    let osc = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;
    osc.set_type(shape);
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    Ok((osc, gain))
}
