#![no_std]
#![no_main]

use defmt::{debug, error, info, trace};
use defmt_rtt as _;
use panic_probe as _;
use rtic::app;

use segment_stopwatch::clock::{Elapsed, Stopwatch};
use segment_stopwatch::display::Reading;
use segment_stopwatch::panel::Mode;
use segment_stopwatch::{TICK_PERIOD_US, XOSC_FREQ_HZ};

/// Stopwatch access from the idle loop, always under the resource lock.
///
/// The alarm interrupt preempts idle, so an unlocked read could see the
/// seconds already wrapped and the minutes not yet bumped.
struct Locked<M>(M);

impl<M> Elapsed for Locked<M>
where
    M: rtic::Mutex<T = Stopwatch>,
{
    fn reset(&mut self) {
        self.0.lock(|c| c.reset())
    }

    fn display_value(&mut self) -> u16 {
        self.0.lock(|c| c.display_value())
    }
}

fn log_mode(mode: &Mode) {
    match mode {
        Mode::Reset => debug!("stopwatch reset"),
        Mode::Voltage(reading) => debug!("showing voltage {=str} V", reading.render().as_str()),
        Mode::Elapsed(reading) => debug!("showing elapsed {=str}", reading.render().as_str()),
    }
}

#[app(device = rp_pico::hal::pac, peripherals = true)]
mod app {
    use super::*;
    use rp_pico::hal::{
        adc::AdcPin,
        clocks::{init_clocks_and_plls, Clock},
        gpio::bank0::{Gpio13, Gpio15, Gpio2, Gpio25, Gpio26, Gpio3, Gpio4},
        gpio::{FunctionSio, Pin, PullDown, PullNone, PullUp, SioInput, SioOutput},
        sio::Sio,
        timer::{Alarm, Alarm0, Timer},
        watchdog::Watchdog,
        fugit::ExtU32,
        Adc,
    };
    use embedded_hal::digital::v2::ToggleableOutputPin;
    use segment_stopwatch::analog::Potentiometer;
    use segment_stopwatch::display::SegmentDisplay;
    use segment_stopwatch::input::Buttons;
    use segment_stopwatch::panel::Panel;
    use segment_stopwatch::shift_register::ShiftRegister;

    type OutputLine<I> = Pin<I, FunctionSio<SioOutput>, PullDown>;
    type Button<I> = Pin<I, FunctionSio<SioInput>, PullUp>;
    type PotPin = AdcPin<Pin<Gpio26, FunctionSio<SioInput>, PullNone>>;
    type Board = Panel<
        Button<Gpio15>,
        Button<Gpio13>,
        Adc,
        Adc,
        PotPin,
        OutputLine<Gpio4>,
        OutputLine<Gpio3>,
        OutputLine<Gpio2>,
    >;

    // Shared resources (accessed by multiple tasks)
    #[shared]
    struct Shared {
        stopwatch: Stopwatch,
    }

    // Local resources (accessed by single tasks)
    #[local]
    struct Local {
        panel: Board,
        delay: cortex_m::delay::Delay,
        led: OutputLine<Gpio25>,
        alarm: Alarm0,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let clocks = init_clocks_and_plls(
            XOSC_FREQ_HZ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let delay = cortex_m::delay::Delay::new(ctx.core.SYST, clocks.system_clock.freq().to_Hz());

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut alarm = timer.alarm_0().unwrap();
        // First tick one second from now
        alarm.schedule(TICK_PERIOD_US.micros()).unwrap();
        alarm.enable_interrupt();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let led = pins.led.into_push_pull_output();

        // 74HC595 pair: segments in the far register, digit select in the near one
        let register = ShiftRegister::new(
            pins.gpio4.into_push_pull_output(),
            pins.gpio3.into_push_pull_output(),
            pins.gpio2.into_push_pull_output(),
        )
        .unwrap();

        let buttons = Buttons::new(pins.gpio15.into_pull_up_input(), pins.gpio13.into_pull_up_input());
        // S2 has no function, pull it up so the line does not float
        let _spare = pins.gpio14.into_pull_up_input();

        let adc = Adc::new(pac.ADC, &mut pac.RESETS);
        let pot_pin = AdcPin::new(pins.gpio26.into_floating_input()).unwrap();
        let pot = Potentiometer::new(adc, pot_pin);

        let panel = Panel::new(buttons, pot, SegmentDisplay::new(register));

        info!("segment stopwatch up");
        info!("  shift register: DS=GP2 SH_CP=GP3 ST_CP=GP4");
        info!("  buttons: reset=GP15 voltage=GP13, pot=GP26");

        (
            Shared {
                stopwatch: Stopwatch::new(),
            },
            Local {
                panel,
                delay,
                led,
                alarm,
            },
            init::Monotonics(),
        )
    }

    // Polling loop: buttons, pot and display refresh
    #[idle(shared = [stopwatch], local = [panel, delay])]
    fn idle(ctx: idle::Context) -> ! {
        let panel = ctx.local.panel;
        let delay = ctx.local.delay;
        let mut stopwatch = Locked(ctx.shared.stopwatch);
        let mut last: Option<Mode> = None;

        loop {
            match panel.poll(&mut stopwatch, delay) {
                Ok(mode) => {
                    if !last.is_some_and(|prev| prev.same_kind(&mode)) {
                        log_mode(&mode);
                    }
                    last = Some(mode);
                }
                Err(e) => error!("refresh failed: {}", defmt::Debug2Format(&e)),
            }
        }
    }

    // Hardware Task: Timer Interrupt (1Hz)
    #[task(binds = TIMER_IRQ_0, priority = 1, shared = [stopwatch], local = [alarm, led])]
    fn timer_tick(mut ctx: timer_tick::Context) {
        // Clear interrupt and schedule next
        ctx.local.alarm.clear_interrupt();
        ctx.local.alarm.schedule(TICK_PERIOD_US.micros()).unwrap();

        ctx.local.led.toggle().unwrap();

        let value = ctx.shared.stopwatch.lock(|c| {
            c.tick();
            c.display_value()
        });
        trace!("tick {=str}", Reading::elapsed(value).render().as_str());
    }
}
