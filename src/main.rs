#![no_std]
#![no_main]

use bcd_clock::MillisCounter;
use defmt_rtt as _;
use panic_halt as _;
use rtic::app;

/// Advanced by the 1 ms timer interrupt, read by the idle loop.
static MILLIS: MillisCounter = MillisCounter::new();

#[app(device = rp_pico::hal::pac, peripherals = true)]
mod app {
    use super::MILLIS;
    use bcd_clock::{Button, ClockConfig, ClockState, Controller, Monotonic, Multiplexer};
    use defmt::info;
    use embedded_hal::digital::v2::ToggleableOutputPin;
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock},
        fugit::MicrosDurationU64,
        gpio::{DynPinId, FunctionSioInput, FunctionSioOutput, Pin, PullDown, PullUp},
        sio::Sio,
        timer::{Alarm, Alarm0, Instant, Timer},
        watchdog::Watchdog,
    };

    type OutputLine = Pin<DynPinId, FunctionSioOutput, PullDown>;
    type ButtonLine = Pin<DynPinId, FunctionSioInput, PullUp>;

    const EXTERNAL_XTAL_FREQ_HZ: u32 = 12_000_000;
    const TICK_PERIOD: MicrosDurationU64 = MicrosDurationU64::millis(1);

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        alarm: Alarm0,
        next_tick: Instant,
        controller: Controller<ButtonLine, OutputLine>,
        delay: cortex_m::delay::Delay,
        led: OutputLine,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);
        let config = ClockConfig::DEFAULT;

        let clocks = init_clocks_and_plls(
            EXTERNAL_XTAL_FREQ_HZ,
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

        // 1 ms tick, re-armed at absolute instants so interrupt latency never accumulates
        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut alarm = timer.alarm_0().unwrap();
        let next_tick = timer.get_counter() + TICK_PERIOD;
        alarm.schedule_at(next_tick).unwrap();
        alarm.enable_interrupt();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        // 7447 inputs A..D (bit 0 first)
        let bcd = [
            pins.gpio2.into_push_pull_output().into_dyn_pin(),
            pins.gpio3.into_push_pull_output().into_dyn_pin(),
            pins.gpio4.into_push_pull_output().into_dyn_pin(),
            pins.gpio5.into_push_pull_output().into_dyn_pin(),
        ];
        // Digit enables, hours tens first
        let enables = [
            pins.gpio6.into_push_pull_output().into_dyn_pin(),
            pins.gpio7.into_push_pull_output().into_dyn_pin(),
            pins.gpio8.into_push_pull_output().into_dyn_pin(),
            pins.gpio9.into_push_pull_output().into_dyn_pin(),
            pins.gpio10.into_push_pull_output().into_dyn_pin(),
            pins.gpio11.into_push_pull_output().into_dyn_pin(),
        ];
        let display = Multiplexer::new(bcd, enables, config.dwell_ms);

        let hour_button = Button::new(
            pins.gpio14.into_pull_up_input().into_dyn_pin(),
            config.debounce_ms,
        );
        let minute_button = Button::new(
            pins.gpio15.into_pull_up_input().into_dyn_pin(),
            config.debounce_ms,
        );

        let led = pins.led.into_push_pull_output().into_dyn_pin();

        let controller = Controller::new(
            ClockState::default(),
            hour_button,
            minute_button,
            display,
            &config,
            MILLIS.now(),
        );

        info!("bcd clock up: {}", config);

        (
            Shared {},
            Local {
                alarm,
                next_tick,
                controller,
                delay,
                led,
            },
            init::Monotonics(),
        )
    }

    // Hardware Task: Timer Interrupt (1 kHz)
    #[task(binds = TIMER_IRQ_0, priority = 1, local = [alarm, next_tick])]
    fn millis_tick(ctx: millis_tick::Context) {
        ctx.local.alarm.clear_interrupt();
        *ctx.local.next_tick = *ctx.local.next_tick + TICK_PERIOD;
        ctx.local.alarm.schedule_at(*ctx.local.next_tick).unwrap();

        MILLIS.tick();
    }

    // Main loop: time, buttons, then one display sweep
    #[idle(local = [controller, delay, led])]
    fn idle(ctx: idle::Context) -> ! {
        info!("starting at {}", ctx.local.controller.clock());
        loop {
            let step = ctx.local.controller.step(MILLIS.now(), ctx.local.delay);
            if step.second_elapsed {
                ctx.local.led.toggle().ok();
            }
        }
    }
}
