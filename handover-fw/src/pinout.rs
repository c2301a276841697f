#[cfg(feature = "nrf5340-dk")]
macro_rules! pinout {
    ($p:ident . console_uarte) => ($p.SERIAL0);
    ($p:ident . console_txd) => ($p.P0_20); // VCOM0 through the interface MCU

    ($p:ident . btn1) => ($p.P0_23); // active low
    ($p:ident . btn2) => ($p.P0_24); // active low

    ($p:ident . led1) => ($p.P0_28); // active low
}

#[cfg(not(feature = "nrf5340-dk"))]
compile_error!("select a board feature");
