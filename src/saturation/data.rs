//! The embedded saturated-water reference table.
//!
//! 55 rows from the triple point (273.13 K) to the critical point
//! (647.3 K), in the raw column units documented on [`SaturationRow`].
//! The data is reproduced verbatim from its source tabulation, quirks
//! included: the 645 K row carries a literal `0.0` vapor heat capacity,
//! the `betaf` column is `0.0` from 430 K on, and the critical row uses
//! `1e20` sentinels where a quantity diverges.

use super::table::SaturationRow;

#[allow(clippy::too_many_arguments)]
const fn row(
    temp: f64,
    pres: f64,
    vf: f64,
    vg: f64,
    hfg: f64,
    cpf: f64,
    cpg: f64,
    muf: f64,
    mug: f64,
    kf: f64,
    kg: f64,
    prf: f64,
    prg: f64,
    st: f64,
    betaf: f64,
) -> SaturationRow {
    SaturationRow {
        temp,
        pres,
        vf,
        vg,
        hfg,
        cpf,
        cpg,
        muf,
        mug,
        kf,
        kg,
        prf,
        prg,
        st,
        betaf,
    }
}

#[rustfmt::skip]
pub(super) static ROWS: [SaturationRow; 55] = [
    row(273.13, 0.00611, 1.0, 206.3, 2502.0, 4.217, 1.854, 1750.0, 8.02, 569.0, 18.2, 12.99, 0.815, 75.5, -68.05),
    row(275.0, 0.00697, 1.0, 181.7, 2497.0, 4.211, 1.855, 1652.0, 8.09, 574.0, 18.3, 12.22, 0.817, 75.3, -32.74),
    row(280.0, 0.0099, 1.0, 130.4, 2485.0, 4.198, 1.858, 1422.0, 8.29, 582.0, 18.6, 10.26, 0.825, 74.8, 46.04),
    row(285.0, 0.01387, 1.0, 99.4, 2473.0, 4.189, 1.861, 1225.0, 8.49, 590.0, 18.9, 8.81, 0.833, 74.3, 114.1),
    row(290.0, 0.01917, 1.001, 69.7, 2461.0, 4.184, 1.864, 1080.0, 8.69, 598.0, 19.3, 7.56, 0.841, 73.7, 174.0),
    row(295.0, 0.02617, 1.002, 51.94, 2449.0, 4.181, 1.868, 959.0, 8.89, 606.0, 19.5, 6.62, 0.849, 72.7, 227.5),
    row(300.0, 0.03531, 1.003, 39.13, 2438.0, 4.179, 1.872, 855.0, 9.09, 613.0, 19.6, 5.83, 0.857, 71.7, 276.1),
    row(305.0, 0.04712, 1.005, 29.74, 2426.0, 4.178, 1.877, 769.0, 9.29, 620.0, 20.1, 5.2, 0.865, 70.9, 320.6),
    row(310.0, 0.06221, 1.007, 22.93, 2414.0, 4.178, 1.882, 695.0, 9.49, 628.0, 20.4, 4.62, 0.873, 70.0, 361.9),
    row(315.0, 0.08132, 1.009, 17.82, 2402.0, 4.179, 1.888, 631.0, 9.69, 634.0, 20.7, 4.16, 0.883, 69.2, 400.4),
    row(320.0, 0.1053, 1.011, 13.98, 2390.0, 4.18, 1.895, 577.0, 9.89, 640.0, 21.0, 3.77, 0.894, 68.3, 436.7),
    row(325.0, 0.1351, 1.013, 11.06, 2378.0, 4.182, 1.903, 528.0, 10.09, 645.0, 21.3, 3.42, 0.901, 67.5, 471.2),
    row(330.0, 0.1719, 1.016, 8.82, 2366.0, 4.194, 1.911, 489.0, 10.29, 650.0, 21.7, 3.15, 0.908, 66.6, 504.0),
    row(335.0, 0.2167, 1.018, 7.09, 2354.0, 4.186, 1.92, 453.0, 10.49, 656.0, 22.0, 2.88, 0.916, 65.8, 535.5),
    row(340.0, 0.2713, 1.021, 5.74, 2342.0, 4.188, 1.93, 420.0, 10.69, 660.0, 22.3, 2.66, 0.925, 64.9, 566.0),
    row(345.0, 0.3372, 1.024, 4.683, 2329.0, 4.191, 1.941, 389.0, 10.89, 668.0, 22.6, 2.45, 0.933, 64.1, 595.4),
    row(350.0, 0.4163, 1.027, 3.846, 2317.0, 4.195, 1.954, 365.0, 11.09, 668.0, 23.0, 2.29, 0.942, 63.2, 624.2),
    row(355.0, 0.51, 1.03, 3.18, 2304.0, 4.199, 1.968, 343.0, 11.29, 671.0, 23.3, 2.14, 0.951, 62.3, 652.3),
    row(360.0, 0.6209, 1.034, 2.645, 2291.0, 4.203, 1.983, 324.0, 11.49, 674.0, 23.7, 2.02, 0.96, 61.4, 697.9),
    row(365.0, 0.7514, 1.038, 2.212, 2278.0, 4.209, 1.999, 306.0, 11.69, 677.0, 24.1, 1.91, 0.969, 60.5, 707.1),
    row(370.0, 0.904, 1.041, 1.961, 2265.0, 4.214, 2.017, 289.0, 11.89, 679.0, 24.5, 1.8, 0.978, 59.5, 728.7),
    row(373.15, 1.0133, 1.044, 1.679, 2257.0, 4.217, 2.029, 279.0, 12.02, 680.0, 24.8, 1.76, 0.994, 58.9, 750.1),
    row(375.0, 1.0815, 1.045, 1.574, 2252.0, 4.22, 2.036, 274.0, 12.09, 681.0, 24.9, 1.7, 0.987, 58.6, 761.0),
    row(380.0, 1.2869, 1.049, 1.337, 2239.0, 4.226, 2.057, 260.0, 12.29, 683.0, 25.4, 1.61, 0.999, 57.6, 798.0),
    row(385.0, 1.5233, 1.053, 1.142, 2225.0, 4.232, 2.08, 248.0, 12.49, 685.0, 25.8, 1.53, 1.004, 56.6, 814.0),
    row(390.0, 1.794, 1.058, 0.98, 2212.0, 4.239, 2.104, 237.0, 12.69, 686.0, 26.3, 1.47, 1.013, 55.6, 841.0),
    row(400.0, 2.455, 1.067, 0.731, 2183.0, 4.256, 2.158, 217.0, 13.05, 688.0, 27.2, 1.34, 1.033, 53.6, 896.0),
    row(410.0, 3.302, 1.077, 0.553, 2153.0, 4.278, 2.221, 200.0, 13.42, 688.0, 28.2, 1.24, 1.054, 51.5, 952.0),
    row(420.0, 4.37, 1.088, 0.425, 2123.0, 4.302, 2.291, 185.0, 13.79, 688.0, 29.8, 1.16, 1.075, 49.4, 1010.0),
    row(430.0, 5.699, 1.099, 0.331, 2091.0, 4.331, 2.369, 173.0, 14.14, 685.0, 30.4, 1.09, 1.1, 47.2, 0.0),
    row(440.0, 7.333, 1.11, 0.261, 2059.0, 4.36, 2.46, 162.0, 14.5, 682.0, 31.7, 1.04, 1.12, 45.1, 0.0),
    row(450.0, 9.319, 1.123, 0.208, 2024.0, 4.4, 2.56, 152.0, 14.85, 678.0, 33.1, 0.99, 1.14, 42.9, 0.0),
    row(460.0, 11.71, 1.137, 0.167, 1989.0, 4.44, 2.68, 143.0, 15.19, 673.0, 34.6, 0.95, 1.17, 40.7, 0.0),
    row(470.0, 14.55, 1.152, 0.136, 1951.0, 4.48, 2.79, 136.0, 15.54, 667.0, 36.3, 0.92, 1.2, 38.5, 0.0),
    row(480.0, 17.9, 1.167, 0.111, 1912.0, 4.53, 2.94, 129.0, 15.88, 660.0, 38.1, 0.89, 1.23, 36.2, 0.0),
    row(490.0, 21.83, 1.184, 0.0922, 1870.0, 4.59, 3.1, 124.0, 16.23, 651.0, 40.1, 0.87, 1.25, 33.9, 0.0),
    row(500.0, 26.4, 1.203, 0.0766, 1825.0, 4.66, 3.27, 118.0, 16.59, 642.0, 42.3, 0.86, 1.28, 31.6, 0.0),
    row(510.0, 31.66, 1.222, 0.0631, 1779.0, 4.74, 3.47, 113.0, 16.95, 631.0, 44.7, 0.85, 1.31, 29.3, 0.0),
    row(520.0, 37.7, 1.244, 0.0525, 1730.0, 4.84, 3.7, 108.0, 17.33, 621.0, 47.5, 0.84, 1.35, 26.9, 0.0),
    row(530.0, 44.58, 1.268, 0.0445, 1679.0, 4.95, 3.96, 104.0, 17.72, 608.0, 50.6, 0.85, 1.39, 24.5, 0.0),
    row(540.0, 52.38, 1.294, 0.0375, 1622.0, 5.08, 4.27, 101.0, 18.1, 594.0, 54.0, 0.86, 1.43, 22.1, 0.0),
    row(550.0, 61.19, 1.323, 0.0317, 1564.0, 5.24, 4.64, 97.0, 18.6, 580.0, 58.3, 0.87, 1.47, 19.7, 0.0),
    row(560.0, 71.08, 1.355, 0.0269, 1499.0, 5.43, 5.09, 94.0, 19.1, 563.0, 63.7, 0.9, 1.52, 17.3, 0.0),
    row(570.0, 82.16, 1.392, 0.0228, 1429.0, 5.68, 5.67, 91.0, 19.7, 548.0, 76.7, 0.94, 1.59, 15.0, 0.0),
    row(580.0, 94.51, 1.433, 0.0193, 1353.0, 6.0, 6.4, 88.0, 20.4, 528.0, 76.7, 0.99, 1.68, 12.8, 0.0),
    row(590.0, 108.3, 1.482, 0.0163, 1274.0, 6.41, 7.35, 84.0, 21.5, 513.0, 84.1, 1.05, 1.84, 10.5, 0.0),
    row(600.0, 123.5, 1.541, 0.0137, 1176.0, 7.0, 8.75, 81.0, 22.7, 497.0, 92.9, 1.14, 2.15, 8.4, 0.0),
    row(610.0, 137.3, 1.612, 0.0115, 1068.0, 7.85, 11.1, 77.0, 24.1, 467.0, 103.0, 1.3, 2.6, 6.3, 0.0),
    row(620.0, 159.1, 1.705, 0.0094, 941.0, 9.35, 15.4, 72.0, 25.9, 444.0, 114.0, 1.52, 3.46, 4.5, 0.0),
    row(625.0, 169.1, 1.778, 0.0085, 858.0, 10.6, 18.3, 70.0, 27.0, 430.0, 121.0, 1.65, 4.2, 3.5, 0.0),
    row(630.0, 179.7, 1.856, 0.0075, 781.0, 12.6, 22.1, 67.0, 28.0, 412.0, 130.0, 2.0, 4.8, 2.6, 0.0),
    row(635.0, 190.9, 1.935, 0.0066, 683.0, 16.4, 27.6, 64.0, 30.0, 392.0, 141.0, 2.7, 6.0, 1.5, 0.0),
    row(640.0, 202.7, 2.075, 0.0057, 560.0, 26.0, 42.0, 59.0, 32.0, 367.0, 155.0, 4.2, 9.6, 0.8, 0.0),
    row(645.0, 215.2, 2.351, 0.0045, 361.0, 90.0, 0.0, 54.0, 37.0, 331.0, 178.0, 12.0, 26.0, 0.1, 0.0),
    row(647.3, 221.2, 3.17, 0.0032, 0.0, 1e20, 1e20, 45.0, 45.0, 238.0, 238.0, 1e20, 1e20, 0.0, 0.0),
];
