//! [`RgbLed`] over three PWM channels.

use crate::engine::RgbLed;
use crate::types::ColorTriple;
use embedded_hal::pwm::SetDutyCycle;

/// RGB LED implementation for PWM-controlled LEDs
///
/// Scales 8-bit intensities to each channel's duty range. Common anode LEDs
/// light up when the pin is low, so their duty is inverted.
pub struct PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    red: R,
    green: G,
    blue: B,
    common_anode: bool,
}

impl<R, G, B> PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Create a new RGB LED controller
    ///
    /// # Arguments
    /// * `red` - PWM channel for red LED
    /// * `green` - PWM channel for green LED
    /// * `blue` - PWM channel for blue LED
    /// * `common_anode` - true for common anode LED (inverted logic), false for common cathode
    pub fn new(red: R, green: G, blue: B, common_anode: bool) -> Self {
        Self {
            red,
            green,
            blue,
            common_anode,
        }
    }

    /// Returns the channels.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }

    fn level(&self, value: u8) -> u8 {
        if self.common_anode { u8::MAX - value } else { value }
    }
}

fn duty_for<C: SetDutyCycle>(channel: &C, level: u8) -> u16 {
    let max = u32::from(channel.max_duty_cycle());
    (u32::from(level) * max / u32::from(u8::MAX)) as u16
}

impl<R, G, B> RgbLed for PwmRgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn set_color(&mut self, color: ColorTriple) {
        let red = duty_for(&self.red, self.level(color.red));
        let green = duty_for(&self.green, self.level(color.green));
        let blue = duty_for(&self.blue, self.level(color.blue));

        let _ = self.red.set_duty_cycle(red);
        let _ = self.green.set_duty_cycle(green);
        let _ = self.blue.set_duty_cycle(blue);
    }
}
