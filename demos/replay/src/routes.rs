//! The two reference routes replayed by the demo.
//!
//! Coordinates are `[lng, lat]`, as they appear in GeoJSON.

use tm_core::{CoreResult, Path};

/// Five-point route off the Gulf of Guinea coast, animated at constant speed.
const COAST_ROUTE: [[f64; 2]; 5] = [
    [6.437242318843829, 0.2184366253244292],
    [5.634441549807484, 0.3830445174890471],
    [5.292891695827521, 1.1707147804883107],
    [4.204749482021477, 0.9158949955678892],
    [3.5859503045884367, 1.4296767208585237],
];

/// 44-point curved Pacific route, animated with a fixed duration per segment.
const PACIFIC_ROUTE: [[f64; 2]; 44] = [
    [-97.14222482244848, 4.6396632037767915],
    [-97.14795714462329, 4.634813211332556],
    [-97.16466918260669, 4.620541979881978],
    [-97.22812283476357, 4.565406961276366],
    [-97.32676663644159, 4.477597896047229],
    [-97.45478144516264, 4.360451699726042],
    [-97.60634811845095, 4.217304177369755],
    [-97.77564751382839, 4.051491530765944],
    [-97.95686048881747, 3.8663515962603725],
    [-98.14416790094182, 3.665224783111668],
    [-98.51378946668505, 3.2283885047374667],
    [-98.68446533535004, 2.999376925315673],
    [-98.83795907124018, 2.767774116957895],
    [-98.96845153187915, 2.536937273394031],
    [-99.07012357478882, 2.3102261208635895],
    [-99.13715605749282, 2.091002323837401],
    [-99.16372983751306, 1.8826288600386931],
    [-99.15541498069685, 1.6749469236957282],
    [-99.1239306193514, 1.45998487314408],
    [-99.07280140615313, 1.2388803491423772],
    [-99.0055519937797, 1.012771912381126],
    [-98.83679118221427, 0.5501014494915069],
    [-98.64584540607083, 0.08109550671755983],
    [-98.46091188676567, -0.38511864226215664],
    [-98.31018784571333, -0.8394143933063276],
    [-98.25646601122473, -1.0592424155099707],
    [-98.22187050433013, -1.2726715399545299],
    [-98.20992597770719, -1.4785635201975396],
    [-98.22415708403236, -1.6757810141515534],
    [-98.2680645162341, -1.861319588045987],
    [-98.34329816967302, -2.0556198074639127],
    [-98.44514471620701, -2.2558137133382843],
    [-98.56889082769288, -2.459034279798473],
    [-98.70982317598737, -2.6624158231723527],
    [-98.8632284329484, -2.863094385835552],
    [-99.1886043602961, -3.2448972175768347],
    [-99.351148374398, -3.4203046105905486],
    [-99.50731198459356, -3.5815753178343073],
    [-99.65238186274127, -3.725856510362931],
    [-99.78164468069788, -3.850297023554532],
    [-99.89038711031961, -3.952046729636109],
    [-99.97389582346494, -4.02825571739703],
    [-100.02745749199009, -4.076073299264664],
    [-100.04635878775241, -4.092646881580407],
];

pub fn coast_route() -> CoreResult<Path> {
    Path::from_lng_lat(&COAST_ROUTE)
}

pub fn pacific_route() -> CoreResult<Path> {
    Path::from_lng_lat(&PACIFIC_ROUTE)
}
