/*!
 * Cycle 0-F and the decimal point on an eight segment display behind a 74HC595.
 */
#![no_std]
#![no_main]

use arduino_hal::{prelude::*, Delay};
use panic_serial as _;
use uno::{BAUD_RATE, HOLD_MS};

panic_serial::impl_panic_handler!(
    // This is the type of the UART port to use for printing the message:
    arduino_hal::usart::Usart<
      arduino_hal::pac::USART0,
      arduino_hal::port::Pin<arduino_hal::port::mode::Input, arduino_hal::hal::port::PD0>,
      arduino_hal::port::Pin<arduino_hal::port::mode::Output, arduino_hal::hal::port::PD1>
    >
);

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);

    let serial = arduino_hal::default_serial!(dp, pins, BAUD_RATE);
    let mut serial = share_serial_port_with_panic(serial);
    ufmt::uwriteln!(&mut serial, "hex cycle: SER d5, SRCLK d6, RCLK d7\r").unwrap_infallible();

    let mut display = uno::display(
        pins.d5.into_output(),
        pins.d6.into_output(),
        pins.d7.into_output(),
    );
    let mut delay = Delay::new();

    let never = display
        .run(&mut delay, HOLD_MS, |symbol| {
            ufmt::uwriteln!(
                &mut serial,
                "{:?} -> {}\r",
                symbol,
                symbol.pattern().bits()
            )
            .unwrap_infallible();
        })
        .unwrap_infallible();
    match never {}
}
