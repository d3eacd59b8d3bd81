//! The published IAPWS-IF97 release values for ordinary water substance.
//!
//! Physical constants, the sparse term lists of the five regional
//! fundamental equations, the saturation quartic, the region-2/3 boundary
//! (pressure in bar), and the backward-equation term lists. All term lists
//! are sorted ascending by (m, n) as required by the evaluation kernel.
use super::If97Parameters;
use crate::polynomial::PolyTerm;

// region 1, evaluated at (7.1 - pi, tau - 1.222)
const REGION1: [PolyTerm; 34] = [
    PolyTerm::new(0, -2, 0.14632971213167),
    PolyTerm::new(0, -1, -0.84548187169114),
    PolyTerm::new(0, 0, -3.756360367204),
    PolyTerm::new(0, 1, 3.3855169168385),
    PolyTerm::new(0, 2, -0.95791963387872),
    PolyTerm::new(0, 3, 0.15772038513228),
    PolyTerm::new(0, 4, -0.016616417199501),
    PolyTerm::new(0, 5, 0.00081214629983568),
    PolyTerm::new(1, -9, 0.00028319080123804),
    PolyTerm::new(1, -7, -0.00060706301565874),
    PolyTerm::new(1, -1, -0.018990068218419),
    PolyTerm::new(1, 0, -0.032529748770505),
    PolyTerm::new(1, 1, -0.021841717175414),
    PolyTerm::new(1, 3, -5.283835796993e-05),
    PolyTerm::new(2, -3, -0.00047184321073267),
    PolyTerm::new(2, 0, -0.00030001780793026),
    PolyTerm::new(2, 1, 4.7661393906987e-05),
    PolyTerm::new(2, 3, -4.4141845330846e-06),
    PolyTerm::new(2, 17, -7.2694996297594e-16),
    PolyTerm::new(3, -4, -3.1679644845054e-05),
    PolyTerm::new(3, 0, -2.8270797985312e-06),
    PolyTerm::new(3, 6, -8.5205128120103e-10),
    PolyTerm::new(4, -5, -2.2425281908e-06),
    PolyTerm::new(4, -2, -6.5171222895601e-07),
    PolyTerm::new(4, 10, -1.4341729937924e-13),
    PolyTerm::new(5, -8, -4.0516996860117e-07),
    PolyTerm::new(8, -11, -1.2734301741641e-09),
    PolyTerm::new(8, -6, -1.7424871230634e-10),
    PolyTerm::new(21, -29, -6.8762131295531e-19),
    PolyTerm::new(23, -31, 1.4478307828521e-20),
    PolyTerm::new(29, -38, 2.6335781662795e-23),
    PolyTerm::new(30, -39, -1.1947622640071e-23),
    PolyTerm::new(31, -40, 1.8228094581404e-24),
    PolyTerm::new(32, -41, -9.3537087292458e-26),
];

// region 2, ideal-gas part, evaluated at (pi, tau); ln(pi) is added separately
const REGION2_IDEAL: [PolyTerm; 9] = [
    PolyTerm::new(0, -5, -0.005608791128302),
    PolyTerm::new(0, -4, 0.071452738081455),
    PolyTerm::new(0, -3, -0.40710498223928),
    PolyTerm::new(0, -2, 1.4240819171444),
    PolyTerm::new(0, -1, -4.383951131945),
    PolyTerm::new(0, 0, -9.6927686500217),
    PolyTerm::new(0, 1, 10.086655968018),
    PolyTerm::new(0, 2, -0.28408632460772),
    PolyTerm::new(0, 3, 0.021268463753307),
];

// region 2, residual part, evaluated at (pi, tau - 0.5)
const REGION2_RESIDUAL: [PolyTerm; 43] = [
    PolyTerm::new(1, 0, -0.0017731742473213),
    PolyTerm::new(1, 1, -0.017834862292358),
    PolyTerm::new(1, 2, -0.045996013696365),
    PolyTerm::new(1, 3, -0.057581259083432),
    PolyTerm::new(1, 6, -0.05032527872793),
    PolyTerm::new(2, 1, -3.3032641670203e-05),
    PolyTerm::new(2, 2, -0.00018948987516315),
    PolyTerm::new(2, 4, -0.0039392777243355),
    PolyTerm::new(2, 7, -0.043797295650573),
    PolyTerm::new(2, 36, -2.6674547914087e-05),
    PolyTerm::new(3, 0, 2.0481737692309e-08),
    PolyTerm::new(3, 1, 4.3870667284435e-07),
    PolyTerm::new(3, 3, -3.227767723857e-05),
    PolyTerm::new(3, 6, -0.0015033924542148),
    PolyTerm::new(3, 35, -0.040668253562649),
    PolyTerm::new(4, 1, -7.8847309559367e-10),
    PolyTerm::new(4, 2, 1.2790717852285e-08),
    PolyTerm::new(4, 3, 4.8225372718507e-07),
    PolyTerm::new(5, 7, 2.2922076337661e-06),
    PolyTerm::new(6, 3, -1.6714766451061e-11),
    PolyTerm::new(6, 16, -0.0021171472321355),
    PolyTerm::new(6, 35, -23.895741934104),
    PolyTerm::new(7, 0, -5.905956432427e-18),
    PolyTerm::new(7, 11, -1.2621808899101e-06),
    PolyTerm::new(7, 25, -0.038946842435739),
    PolyTerm::new(8, 8, 1.1256211360459e-11),
    PolyTerm::new(8, 36, -8.2311340897998),
    PolyTerm::new(9, 13, 1.9809712802088e-08),
    PolyTerm::new(10, 4, 1.0406965210174e-19),
    PolyTerm::new(10, 10, -1.0234747095929e-13),
    PolyTerm::new(10, 14, -1.0018179379511e-09),
    PolyTerm::new(16, 29, -8.0882908646985e-11),
    PolyTerm::new(16, 50, 0.10693031879409),
    PolyTerm::new(18, 57, -0.33662250574171),
    PolyTerm::new(20, 20, 8.9185845355421e-25),
    PolyTerm::new(20, 35, 3.0629316876232e-13),
    PolyTerm::new(20, 48, -4.2002467698208e-06),
    PolyTerm::new(21, 21, -5.9056029685639e-26),
    PolyTerm::new(22, 53, 3.7826947613457e-06),
    PolyTerm::new(23, 39, -1.2768608934681e-15),
    PolyTerm::new(24, 26, 7.3087610595061e-29),
    PolyTerm::new(24, 40, 5.5414715350778e-17),
    PolyTerm::new(24, 58, -9.436970724121e-07),
];

// region 3, evaluated at (delta, tau); the ln(delta) multiplier is REGION3_LN
const REGION3: [PolyTerm; 39] = [
    PolyTerm::new(0, 0, -15.732845290239),
    PolyTerm::new(0, 1, 20.944396974307),
    PolyTerm::new(0, 2, -7.6867707878716),
    PolyTerm::new(0, 7, 2.6185947787954),
    PolyTerm::new(0, 10, -2.808078114862),
    PolyTerm::new(0, 12, 1.2053369696517),
    PolyTerm::new(0, 23, -0.0084566812812502),
    PolyTerm::new(1, 2, -1.2654315477714),
    PolyTerm::new(1, 6, -1.1524407806681),
    PolyTerm::new(1, 15, 0.88521043984318),
    PolyTerm::new(1, 17, -0.64207765181607),
    PolyTerm::new(2, 0, 0.38493460186671),
    PolyTerm::new(2, 2, -0.85214708824206),
    PolyTerm::new(2, 6, 4.8972281541877),
    PolyTerm::new(2, 7, -3.0502617256965),
    PolyTerm::new(2, 22, 0.039420536879154),
    PolyTerm::new(2, 26, 0.12558408424308),
    PolyTerm::new(3, 0, -0.2799932969871),
    PolyTerm::new(3, 2, 1.389979956946),
    PolyTerm::new(3, 4, -2.018991502357),
    PolyTerm::new(3, 16, -0.0082147637173963),
    PolyTerm::new(3, 26, -0.47596035734923),
    PolyTerm::new(4, 0, 0.0439840744735),
    PolyTerm::new(4, 2, -0.44476435428739),
    PolyTerm::new(4, 4, 0.90572070719733),
    PolyTerm::new(4, 26, 0.70522450087967),
    PolyTerm::new(5, 1, 0.10770512626332),
    PolyTerm::new(5, 3, -0.32913623258954),
    PolyTerm::new(5, 26, -0.50871062041158),
    PolyTerm::new(6, 0, -0.022175400873096),
    PolyTerm::new(6, 2, 0.094260751665092),
    PolyTerm::new(6, 26, 0.16436278447961),
    PolyTerm::new(7, 2, -0.013503372241348),
    PolyTerm::new(8, 26, -0.014834345352472),
    PolyTerm::new(9, 2, 0.00057922953628084),
    PolyTerm::new(9, 26, 0.0032308904703711),
    PolyTerm::new(10, 0, 8.0964802996215e-05),
    PolyTerm::new(10, 1, -0.00016557679795037),
    PolyTerm::new(11, 26, -4.4923899061815e-05),
];

const REGION3_LN: f64 = 1.0658070028513;

// region 5, ideal-gas part; ln(pi) is added separately
const REGION5_IDEAL: [PolyTerm; 6] = [
    PolyTerm::new(0, -3, -0.024805148933466),
    PolyTerm::new(0, -2, 0.36901534980333),
    PolyTerm::new(0, -1, -3.1161318213925),
    PolyTerm::new(0, 0, -13.179983674201),
    PolyTerm::new(0, 1, 6.8540841634434),
    PolyTerm::new(0, 2, -0.32961626538917),
];

// region 5, residual part
const REGION5_RESIDUAL: [PolyTerm; 6] = [
    PolyTerm::new(1, 1, 0.0015736404855259),
    PolyTerm::new(1, 2, 0.00090153761673944),
    PolyTerm::new(1, 3, -0.0050270077677648),
    PolyTerm::new(2, 3, 2.2440037409485e-06),
    PolyTerm::new(2, 9, -4.1163275453471e-06),
    PolyTerm::new(3, 7, 3.7919454822955e-08),
];

// saturation quartic, n1..n10
const REGION4: [f64; 10] = [
    1167.0521452767,
    -724213.16703206,
    -17.073846940092,
    12020.82470247,
    -3232555.0322333,
    14.91510861353,
    -4823.2657361591,
    405113.40542057,
    -0.23855557567849,
    650.17534844798,
];

// region-2/3 boundary with pressure in bar
const B23: [f64; 5] = [
    3480.5185628969,
    -11.671859879975,
    0.010192970039326,
    572.54459862746,
    139.1883977887,
];

// backward T(h,p), region 1, evaluated at (pi, eta + 1) with eta = h/2500
const TH1: [PolyTerm; 20] = [
    PolyTerm::new(0, 0, -238.72489924521),
    PolyTerm::new(0, 1, 404.21188637945),
    PolyTerm::new(0, 2, 113.49746881718),
    PolyTerm::new(0, 6, -5.8457616048039),
    PolyTerm::new(0, 22, -0.0001528548241314),
    PolyTerm::new(0, 32, -1.0866707695377e-06),
    PolyTerm::new(1, 0, -13.391744872602),
    PolyTerm::new(1, 1, 43.211039183559),
    PolyTerm::new(1, 2, -54.010067170506),
    PolyTerm::new(1, 3, 30.535892203916),
    PolyTerm::new(1, 4, -6.5964749423638),
    PolyTerm::new(1, 10, 0.0093965400878363),
    PolyTerm::new(1, 32, 1.157364750534e-07),
    PolyTerm::new(2, 10, -2.5858641282073e-05),
    PolyTerm::new(2, 32, -4.0644363084799e-09),
    PolyTerm::new(3, 10, 6.6456186191635e-08),
    PolyTerm::new(3, 32, 8.0670734103027e-11),
    PolyTerm::new(4, 32, -9.3477771213947e-13),
    PolyTerm::new(5, 32, 5.8265442020601e-15),
    PolyTerm::new(6, 32, -1.5020185953503e-17),
];

// backward T(s,p), region 1, evaluated at (pi, s + 2)
const TS1: [PolyTerm; 20] = [
    PolyTerm::new(0, 0, 174.78268058307),
    PolyTerm::new(0, 1, 34.806930892873),
    PolyTerm::new(0, 2, 6.5292584978455),
    PolyTerm::new(0, 3, 0.33039981775489),
    PolyTerm::new(0, 11, -1.9281382923196e-07),
    PolyTerm::new(0, 31, -2.4909197244573e-23),
    PolyTerm::new(1, 0, -0.26107636489332),
    PolyTerm::new(1, 1, 0.22592965981586),
    PolyTerm::new(1, 2, -0.064256463395226),
    PolyTerm::new(1, 3, 0.0078876289270526),
    PolyTerm::new(1, 12, 3.5672110607366e-10),
    PolyTerm::new(1, 31, 1.7332496994895e-24),
    PolyTerm::new(2, 0, 0.00056608900654837),
    PolyTerm::new(2, 1, -0.00032635483139717),
    PolyTerm::new(2, 2, 4.4778286690632e-05),
    PolyTerm::new(2, 9, -5.1322156908507e-10),
    PolyTerm::new(2, 31, -4.2522657042207e-26),
    PolyTerm::new(3, 10, 2.6400441360689e-13),
    PolyTerm::new(3, 32, 7.8124600459723e-29),
    PolyTerm::new(4, 32, -3.0732199903668e-31),
];

// backward T(h,p), region 2a, evaluated at (pi, eta - 2.1) with eta = h/2000
const TH2A: [PolyTerm; 34] = [
    PolyTerm::new(0, 0, 1089.8952318288),
    PolyTerm::new(0, 1, 849.51654495535),
    PolyTerm::new(0, 2, -107.81748091826),
    PolyTerm::new(0, 3, 33.153654801263),
    PolyTerm::new(0, 7, -7.4232016790248),
    PolyTerm::new(0, 20, 11.765048724356),
    PolyTerm::new(1, 0, 1.844574935579),
    PolyTerm::new(1, 1, -4.1792700549624),
    PolyTerm::new(1, 2, 6.2478196935812),
    PolyTerm::new(1, 3, -17.344563108114),
    PolyTerm::new(1, 7, -200.58176862096),
    PolyTerm::new(1, 9, 271.96065473796),
    PolyTerm::new(1, 11, -455.11318285818),
    PolyTerm::new(1, 18, 3091.9688604755),
    PolyTerm::new(1, 44, 252266.40357872),
    PolyTerm::new(2, 0, -0.0061707422868339),
    PolyTerm::new(2, 2, -0.31078046629583),
    PolyTerm::new(2, 7, 11.670873077107),
    PolyTerm::new(2, 36, 128127984.04046),
    PolyTerm::new(2, 38, -985549096.23276),
    PolyTerm::new(2, 40, 2822454697.3002),
    PolyTerm::new(2, 42, -3594897141.0703),
    PolyTerm::new(2, 44, 1722734991.3197),
    PolyTerm::new(3, 24, -13551.334240775),
    PolyTerm::new(3, 44, 12848734.66465),
    PolyTerm::new(4, 12, 1.3865724283226),
    PolyTerm::new(4, 32, 235988.32556514),
    PolyTerm::new(4, 44, -13105236.545054),
    PolyTerm::new(5, 32, 7399.9835474766),
    PolyTerm::new(5, 36, -551966.9703006),
    PolyTerm::new(5, 42, 3715408.5996233),
    PolyTerm::new(6, 34, 19127.72923966),
    PolyTerm::new(6, 44, -415351.64835634),
    PolyTerm::new(7, 28, -62.459855192507),
];

// backward T(h,p), region 2b, evaluated at (pi - 2, eta - 2.6)
const TH2B: [PolyTerm; 38] = [
    PolyTerm::new(0, 0, 1489.5041079516),
    PolyTerm::new(0, 1, 743.07798314034),
    PolyTerm::new(0, 2, -97.708318797837),
    PolyTerm::new(0, 12, 2.4742464705674),
    PolyTerm::new(0, 18, -0.63281320016026),
    PolyTerm::new(0, 24, 1.1385952129658),
    PolyTerm::new(0, 28, -0.47811863648625),
    PolyTerm::new(0, 40, 0.0085208123431544),
    PolyTerm::new(1, 0, 0.93747147377932),
    PolyTerm::new(1, 2, 3.3593118604916),
    PolyTerm::new(1, 6, 3.3809355601454),
    PolyTerm::new(1, 12, 0.16844539671904),
    PolyTerm::new(1, 18, 0.73875745236695),
    PolyTerm::new(1, 24, -0.47128737436186),
    PolyTerm::new(1, 28, 0.15020273139707),
    PolyTerm::new(1, 40, -0.002176411421975),
    PolyTerm::new(2, 2, -0.021810755324761),
    PolyTerm::new(2, 8, -0.10829784403677),
    PolyTerm::new(2, 18, -0.046333324635812),
    PolyTerm::new(2, 40, 7.1280351959551e-05),
    PolyTerm::new(3, 1, 0.00011032831789999),
    PolyTerm::new(3, 2, 0.00018955248387902),
    PolyTerm::new(3, 12, 0.0030891541160537),
    PolyTerm::new(3, 24, 0.0013555504554949),
    PolyTerm::new(4, 2, 2.8640237477456e-07),
    PolyTerm::new(4, 12, -1.0779857357512e-05),
    PolyTerm::new(4, 18, -7.6462712454814e-05),
    PolyTerm::new(4, 24, 1.4052392818316e-05),
    PolyTerm::new(4, 28, -3.1083814331434e-05),
    PolyTerm::new(4, 40, -1.0302738212103e-06),
    PolyTerm::new(5, 18, 2.821728163504e-07),
    PolyTerm::new(5, 24, 1.2704902271945e-06),
    PolyTerm::new(5, 40, 7.3803353468292e-08),
    PolyTerm::new(6, 28, -1.1030139238909e-08),
    PolyTerm::new(7, 2, -8.1456365207833e-14),
    PolyTerm::new(7, 28, -2.5180545682962e-11),
    PolyTerm::new(9, 1, -1.7565233969407e-18),
    PolyTerm::new(9, 40, 8.6934156344163e-15),
];

// backward T(h,p), region 2c, evaluated at (pi + 25, eta - 1.8)
const TH2C: [PolyTerm; 23] = [
    PolyTerm::new(-7, 0, -3236839855524.2),
    PolyTerm::new(-7, 4, 7326335090218.1),
    PolyTerm::new(-6, 0, 358250899454.47),
    PolyTerm::new(-6, 2, -583401318515.9),
    PolyTerm::new(-5, 0, -10783068217.47),
    PolyTerm::new(-5, 2, 20825544563.171),
    PolyTerm::new(-2, 0, 610747.83564516),
    PolyTerm::new(-2, 1, 859777.2253558),
    PolyTerm::new(-1, 0, -25745.72360417),
    PolyTerm::new(-1, 2, 31081.088422714),
    PolyTerm::new(0, 0, 1208.2315865936),
    PolyTerm::new(0, 1, 482.19755109255),
    PolyTerm::new(1, 4, 3.7966001272486),
    PolyTerm::new(1, 8, -10.842984880077),
    PolyTerm::new(2, 4, -0.04536417267666),
    PolyTerm::new(6, 0, 1.4559115658698e-13),
    PolyTerm::new(6, 1, 1.126159740723e-12),
    PolyTerm::new(6, 4, -1.7804982240686e-11),
    PolyTerm::new(6, 10, 1.2324579690832e-07),
    PolyTerm::new(6, 12, -1.1606921130984e-06),
    PolyTerm::new(6, 16, 2.7846367088554e-05),
    PolyTerm::new(6, 20, -0.00059270038474176),
    PolyTerm::new(6, 22, 0.0012918582991878),
];

// backward T(s,p), region 2a, evaluated at (pi^0.25, sigma - 2) with
// sigma = s/2; the quarter powers of pi make the stored exponents 4*I
const TS2A: [PolyTerm; 46] = [
    PolyTerm::new(-6, -24, -392359.83861984),
    PolyTerm::new(-6, -23, 515265.7382727),
    PolyTerm::new(-6, -19, 40482.443161048),
    PolyTerm::new(-6, -13, -321.93790923902),
    PolyTerm::new(-6, -11, 96.961424218694),
    PolyTerm::new(-6, -10, -22.867846371773),
    PolyTerm::new(-5, -19, -449429.14124357),
    PolyTerm::new(-5, -15, -5011.8336020166),
    PolyTerm::new(-5, -6, 0.35684463560015),
    PolyTerm::new(-4, -26, 44235.33584819),
    PolyTerm::new(-4, -21, -13673.388811708),
    PolyTerm::new(-4, -17, 421632.60207864),
    PolyTerm::new(-4, -16, 22516.925837475),
    PolyTerm::new(-4, -9, 474.42144865646),
    PolyTerm::new(-4, -8, -149.31130797647),
    PolyTerm::new(-3, -15, -197811.26320452),
    PolyTerm::new(-3, -14, -23554.39947076),
    PolyTerm::new(-2, -26, -19070.616302076),
    PolyTerm::new(-2, -13, 55375.669883164),
    PolyTerm::new(-2, -9, 3829.3691437363),
    PolyTerm::new(-2, -7, -603.91860580567),
    PolyTerm::new(-1, -27, 1936.3102620331),
    PolyTerm::new(-1, -25, 4266.064369861),
    PolyTerm::new(-1, -11, -5978.0638872718),
    PolyTerm::new(-1, -6, -704.01463926862),
    PolyTerm::new(1, 1, 338.36784107553),
    PolyTerm::new(1, 4, 20.862786635187),
    PolyTerm::new(1, 8, 0.033834172656196),
    PolyTerm::new(1, 11, -4.3124428414893e-05),
    PolyTerm::new(2, 0, 166.53791356412),
    PolyTerm::new(2, 1, -139.86292055898),
    PolyTerm::new(2, 5, -0.78849547999872),
    PolyTerm::new(2, 6, 0.072132411753872),
    PolyTerm::new(2, 10, -0.0059754839398283),
    PolyTerm::new(2, 14, -1.2141358953904e-05),
    PolyTerm::new(2, 16, 2.3227096733871e-07),
    PolyTerm::new(3, 0, -10.538463566194),
    PolyTerm::new(3, 4, 2.0718925496502),
    PolyTerm::new(3, 9, -0.072193155260427),
    PolyTerm::new(3, 17, 2.074988708112e-07),
    PolyTerm::new(4, 7, -0.018340657911379),
    PolyTerm::new(4, 18, 2.9036272348696e-07),
    PolyTerm::new(5, 3, 0.21037527893619),
    PolyTerm::new(5, 15, 0.00025681239729999),
    PolyTerm::new(6, 5, -0.012799002933781),
    PolyTerm::new(6, 18, -8.2198102652018e-06),
];

// backward T(s,p), region 2b, evaluated at (pi, 10 - sigma) with sigma = s/0.7853
const TS2B: [PolyTerm; 44] = [
    PolyTerm::new(-6, 0, 268539.91151558),
    PolyTerm::new(-6, 11, 18.97918588229),
    PolyTerm::new(-5, 0, -344855.28252816),
    PolyTerm::new(-5, 11, -20.484744320966),
    PolyTerm::new(-4, 0, 198457.70891929),
    PolyTerm::new(-4, 1, -2796.6603142816),
    PolyTerm::new(-4, 11, 9.6593745210208),
    PolyTerm::new(-3, 0, -68617.721424755),
    PolyTerm::new(-3, 1, 2950.0393843802),
    PolyTerm::new(-3, 11, -3.4781267563642),
    PolyTerm::new(-3, 12, 0.39427242170511),
    PolyTerm::new(-2, 0, 16458.988274347),
    PolyTerm::new(-2, 1, -1406.4423944372),
    PolyTerm::new(-2, 6, 1.0178511684252),
    PolyTerm::new(-2, 10, 0.94098969165817),
    PolyTerm::new(-1, 0, -3268.4473041545),
    PolyTerm::new(-1, 1, 467.21381077129),
    PolyTerm::new(-1, 5, -1.9084507322705),
    PolyTerm::new(-1, 8, 0.42480939817213),
    PolyTerm::new(-1, 9, -0.3559678852459),
    PolyTerm::new(0, 0, 1379.9430872082),
    PolyTerm::new(0, 1, -406.2008683533),
    PolyTerm::new(0, 2, 41.736755708211),
    PolyTerm::new(0, 4, 2.3424896766425),
    PolyTerm::new(0, 5, -1.1899421594888),
    PolyTerm::new(0, 6, 0.40996036021818),
    PolyTerm::new(0, 9, 0.0057232221333365),
    PolyTerm::new(1, 0, 13.135031395595),
    PolyTerm::new(1, 1, -2.8720708393439),
    PolyTerm::new(1, 2, 0.54216385916173),
    PolyTerm::new(1, 3, -0.092334497650105),
    PolyTerm::new(1, 7, -0.0037257250085479),
    PolyTerm::new(1, 8, 0.00028357362758225),
    PolyTerm::new(2, 0, -0.16184161760062),
    PolyTerm::new(2, 1, 0.030650113830612),
    PolyTerm::new(2, 5, 0.00041988890280082),
    PolyTerm::new(3, 0, 0.0018680217362273),
    PolyTerm::new(3, 1, -0.00041640122724408),
    PolyTerm::new(3, 3, -3.8888791035155e-05),
    PolyTerm::new(4, 0, -1.5879939286512e-05),
    PolyTerm::new(4, 1, 6.1677365805017e-06),
    PolyTerm::new(5, 0, 4.356322497553e-08),
    PolyTerm::new(5, 1, -2.1434913503762e-08),
    PolyTerm::new(5, 2, 1.5751664694423e-09),
];

// backward T(s,p), region 2c, evaluated at (pi, 2 - sigma) with sigma = s/2.9251
const TS2C: [PolyTerm; 30] = [
    PolyTerm::new(-2, 0, 909.68501005365),
    PolyTerm::new(-2, 1, 2404.566708842),
    PolyTerm::new(-1, 0, -591.6232638713),
    PolyTerm::new(0, 0, 541.45404128074),
    PolyTerm::new(0, 1, -270.98308411192),
    PolyTerm::new(0, 2, 979.76525097926),
    PolyTerm::new(0, 3, -469.66772959435),
    PolyTerm::new(1, 0, 14.399274604723),
    PolyTerm::new(1, 1, -19.104204230429),
    PolyTerm::new(1, 3, 5.3299167111971),
    PolyTerm::new(1, 4, -21.252975375934),
    PolyTerm::new(2, 0, -0.3114733441376),
    PolyTerm::new(2, 1, 0.60334840894623),
    PolyTerm::new(2, 2, -0.042764839702509),
    PolyTerm::new(3, 0, 0.0058185597255259),
    PolyTerm::new(3, 1, -0.014597008284753),
    PolyTerm::new(3, 5, 0.0056631175631027),
    PolyTerm::new(4, 0, -7.6155864584577e-05),
    PolyTerm::new(4, 1, 0.00022440342919332),
    PolyTerm::new(4, 4, -1.2561095013413e-05),
    PolyTerm::new(5, 0, 6.3323132660934e-07),
    PolyTerm::new(5, 1, -2.0541989675375e-06),
    PolyTerm::new(5, 2, 3.6405370390082e-08),
    PolyTerm::new(6, 0, -2.9759897789215e-09),
    PolyTerm::new(6, 1, 1.0136618529763e-08),
    PolyTerm::new(7, 0, 5.9925719692351e-12),
    PolyTerm::new(7, 1, -2.0677870105164e-11),
    PolyTerm::new(7, 3, -2.0874278181886e-11),
    PolyTerm::new(7, 4, 1.0162166825089e-10),
    PolyTerm::new(7, 5, -1.6429828281347e-10),
];
/// The built-in coefficient bundle.
pub(super) fn water_parameters() -> If97Parameters {
    If97Parameters {
        r: 0.461526,
        tc: 647.096,
        pc: 220.64,
        dc: 322.0,
        tt: 273.16,
        pt: 0.00611657,
        mw: 18.015268,
        r1: REGION1.to_vec(),
        r2o: REGION2_IDEAL.to_vec(),
        r2r: REGION2_RESIDUAL.to_vec(),
        r3: REGION3.to_vec(),
        r3ln: REGION3_LN,
        r4: REGION4,
        b23: B23,
        r5o: REGION5_IDEAL.to_vec(),
        r5r: REGION5_RESIDUAL.to_vec(),
        th1: TH1.to_vec(),
        ts1: TS1.to_vec(),
        th2a: TH2A.to_vec(),
        th2b: TH2B.to_vec(),
        th2c: TH2C.to_vec(),
        ts2a: TS2A.to_vec(),
        ts2b: TS2B.to_vec(),
        ts2c: TS2C.to_vec(),
    }
}
